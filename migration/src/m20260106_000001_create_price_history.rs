use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PriceHistory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::WhiskeyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::Price)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::PriceUsd)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::ExchangeRate)
                            .decimal_len(18, 6)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PriceHistory::PriceDate).date().not_null())
                    .col(ColumnDef::new(PriceHistory::Source).string().null())
                    .col(ColumnDef::new(PriceHistory::SourceUrl).string().null())
                    .col(
                        ColumnDef::new(PriceHistory::Currency)
                            .string_len(8)
                            .not_null()
                            .default("KRW"),
                    )
                    .col(
                        ColumnDef::new(PriceHistory::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Price charts read newest-first per whiskey
        manager
            .create_index(
                Index::create()
                    .name("idx_price_history_whiskey_date")
                    .table(PriceHistory::Table)
                    .col(PriceHistory::WhiskeyId)
                    .col((PriceHistory::PriceDate, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceHistory::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PriceHistory {
    Table,
    Id,
    WhiskeyId,
    Price,
    PriceUsd,
    ExchangeRate,
    PriceDate,
    Source,
    SourceUrl,
    Currency,
    CreatedAt,
}
