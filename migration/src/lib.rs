pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_whiskies;
mod m20260105_000002_create_purchases;
mod m20260105_000003_create_tasting_notes;
mod m20260106_000001_create_price_history;
mod m20260120_000001_create_app_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_whiskies::Migration),
            Box::new(m20260105_000002_create_purchases::Migration),
            Box::new(m20260105_000003_create_tasting_notes::Migration),
            Box::new(m20260106_000001_create_price_history::Migration),
            Box::new(m20260120_000001_create_app_settings::Migration),
        ]
    }
}
