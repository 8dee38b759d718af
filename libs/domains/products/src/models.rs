use rust_decimal::Decimal;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category
///
/// Round-trips through JSON as its symbolic name (`"CLOTHS"`); stored in
/// PostgreSQL as the `category` enum with lowercase values.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "category")]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Category {
    #[default]
    #[sea_orm(string_value = "unknown")]
    Unknown,
    #[sea_orm(string_value = "cloths")]
    Cloths,
    #[sea_orm(string_value = "food")]
    Food,
    #[sea_orm(string_value = "housewares")]
    Housewares,
    #[sea_orm(string_value = "automotive")]
    Automotive,
    #[sea_orm(string_value = "tools")]
    Tools,
}

/// Product entity
///
/// `id` is `None` until the product is first persisted; after that it is
/// server-assigned, unique, and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: Option<i32>,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price; round-trips as a decimal string ("19.99")
    #[serde(with = "rust_decimal::serde::str")]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    /// Whether the product is available
    pub available: bool,
    /// Product category
    pub category: Category,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 250))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// DTO for updating an existing product
///
/// Carries the full payload: an update replaces every client-settable field,
/// so the body shape is the same as for create.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 250))]
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

/// Query filters for listing products
///
/// Query-string values are parsed leniently, the way the admin UI sends
/// them: `available` accepts `true/false/1/0/yes/no` in any case, and
/// `category` matches names case-insensitively. JSON bodies stay strict.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,
    /// Category name (case-insensitive)
    #[serde(default, deserialize_with = "category_from_name")]
    pub category: Option<Category>,
    /// Availability flag
    #[serde(default, deserialize_with = "lenient_bool")]
    pub available: Option<bool>,
}

impl Product {
    /// Build an unsaved product from a create payload (`id` stays `None`)
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: None,
            name: input.name,
            description: input.description,
            price: input.price,
            available: input.available,
            category: input.category,
        }
    }

    /// Replace every client-settable field from an update payload
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.available = update.available;
        self.category = update.category;
    }
}

fn category_from_name<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    use std::str::FromStr;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        Category::from_str(&value)
            .map_err(|_| serde::de::Error::custom(format!("unknown category '{}'", value)))
    })
    .transpose()
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(serde::de::Error::custom(format!(
            "invalid boolean '{}'",
            value
        ))),
    })
    .transpose()
}
