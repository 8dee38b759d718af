//! Index page for the catalog admin UI

use axum::{Router, response::Html, routing::get};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Product Catalog Administration</title>
</head>
<body>
    <h1>Product Catalog Administration</h1>
    <p>REST API for the product catalog. See <a href="/swagger-ui">/swagger-ui</a>
    for interactive documentation, or start with <code>GET /products</code>.</p>
</body>
</html>
"#;

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_page() {
        let response = router()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Product Catalog Administration"));
    }
}
