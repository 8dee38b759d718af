use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create category enum
        manager
            .create_type(
                Type::create()
                    .as_enum(Category::Enum)
                    .values([
                        Category::Unknown,
                        Category::Cloths,
                        Category::Food,
                        Category::Housewares,
                        Category::Automotive,
                        Category::Tools,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::Name, 100))
                    .col(string_len(Products::Description, 250).default(""))
                    .col(decimal_len(Products::Price, 10, 2))
                    .col(boolean(Products::Available).default(true))
                    .col(
                        ColumnDef::new(Products::Category)
                            .enumeration(
                                Category::Enum,
                                [
                                    Category::Unknown,
                                    Category::Cloths,
                                    Category::Food,
                                    Category::Housewares,
                                    Category::Automotive,
                                    Category::Tools,
                                ],
                            )
                            .not_null()
                            .default("unknown"),
                    )
                    .to_owned(),
            )
            .await?;

        // Create indexes for the list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_products_name")
                    .table(Products::Table)
                    .col(Products::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category")
                    .table(Products::Table)
                    .col(Products::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_available")
                    .table(Products::Table)
                    .col(Products::Available)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(Category::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Available,
    Category,
}

#[derive(DeriveIden)]
enum Category {
    #[sea_orm(iden = "category")]
    Enum,
    #[sea_orm(iden = "unknown")]
    Unknown,
    #[sea_orm(iden = "cloths")]
    Cloths,
    #[sea_orm(iden = "food")]
    Food,
    #[sea_orm(iden = "housewares")]
    Housewares,
    #[sea_orm(iden = "automotive")]
    Automotive,
    #[sea_orm(iden = "tools")]
    Tools,
}
