use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TastingNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TastingNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::PurchaseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::TastingDate)
                            .date()
                            .not_null(),
                    )
                    // Nullable: unrated is not rated-zero
                    .col(ColumnDef::new(TastingNotes::Rating).double().null())
                    .col(ColumnDef::new(TastingNotes::Nose).text().null())
                    .col(ColumnDef::new(TastingNotes::Palate).text().null())
                    .col(ColumnDef::new(TastingNotes::Finish).text().null())
                    .col(ColumnDef::new(TastingNotes::Notes).text().null())
                    .col(
                        ColumnDef::new(TastingNotes::AmountConsumedMl)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TastingNotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasting_notes_purchase")
                    .table(TastingNotes::Table)
                    .col(TastingNotes::PurchaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TastingNotes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TastingNotes {
    Table,
    Id,
    PurchaseId,
    TastingDate,
    Rating,
    Nose,
    Palate,
    Finish,
    Notes,
    AmountConsumedMl,
    CreatedAt,
}
