use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purchases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Purchases::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Purchases::WhiskeyId).integer().not_null())
                    .col(ColumnDef::new(Purchases::PurchaseDate).date().not_null())
                    .col(ColumnDef::new(Purchases::Store).string().null())
                    .col(
                        ColumnDef::new(Purchases::FinalPrice)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Purchases::DiscountBasic)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Purchases::DiscountCoupon)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Purchases::DiscountMembership)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Purchases::DiscountEvent)
                            .decimal_len(14, 2)
                            .null(),
                    )
                    .col(ColumnDef::new(Purchases::DiscountCurrency).string().null())
                    .col(
                        ColumnDef::new(Purchases::ExchangeRate)
                            .decimal_len(18, 6)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Purchases::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        // Collection assembly filters purchases by whiskey and sorts by date
        manager
            .create_index(
                Index::create()
                    .name("idx_purchases_whiskey_date")
                    .table(Purchases::Table)
                    .col(Purchases::WhiskeyId)
                    .col((Purchases::PurchaseDate, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchases::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Purchases {
    Table,
    Id,
    WhiskeyId,
    PurchaseDate,
    Store,
    FinalPrice,
    DiscountBasic,
    DiscountCoupon,
    DiscountMembership,
    DiscountEvent,
    DiscountCurrency,
    ExchangeRate,
    CreatedAt,
}
