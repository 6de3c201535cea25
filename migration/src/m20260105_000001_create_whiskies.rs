use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Whiskies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Whiskies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Whiskies::Name).string().not_null())
                    .col(ColumnDef::new(Whiskies::NameEn).string().null())
                    .col(ColumnDef::new(Whiskies::NameKo).string().null())
                    .col(ColumnDef::new(Whiskies::Brand).string().null())
                    .col(ColumnDef::new(Whiskies::WhiskeyType).string().null())
                    .col(ColumnDef::new(Whiskies::AgeYears).integer().null())
                    .col(ColumnDef::new(Whiskies::VolumeMl).integer().null())
                    .col(ColumnDef::new(Whiskies::Abv).double().null())
                    .col(ColumnDef::new(Whiskies::Region).string().null())
                    .col(ColumnDef::new(Whiskies::Distillery).string().null())
                    .col(ColumnDef::new(Whiskies::CaskInfo).string().null())
                    .col(ColumnDef::new(Whiskies::Description).text().null())
                    .col(ColumnDef::new(Whiskies::ReferenceUrl).string().null())
                    .col(ColumnDef::new(Whiskies::ImageUrl).string().null())
                    .col(
                        ColumnDef::new(Whiskies::CurrentPrice)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Whiskies::CurrentPriceUsd)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Whiskies::PriceUpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Whiskies::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // The list view filters by brand and type
        manager
            .create_index(
                Index::create()
                    .name("idx_whiskies_brand")
                    .table(Whiskies::Table)
                    .col(Whiskies::Brand)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_whiskies_type")
                    .table(Whiskies::Table)
                    .col(Whiskies::WhiskeyType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Whiskies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Whiskies {
    Table,
    Id,
    Name,
    NameEn,
    NameKo,
    Brand,
    WhiskeyType,
    AgeYears,
    VolumeMl,
    Abv,
    Region,
    Distillery,
    CaskInfo,
    Description,
    ReferenceUrl,
    ImageUrl,
    CurrentPrice,
    CurrentPriceUsd,
    PriceUpdatedAt,
    CreatedAt,
}
