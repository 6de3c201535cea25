//! SeaORM Entity for the append-only price history log
//!
//! Rows are inserted on price registration and never mutated afterwards.
//! The whiskey's `current_price`/`current_price_usd` columns cache the
//! latest entry and may lag behind this table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub whiskey_id: i32,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price_usd: Decimal,
    /// Local-currency-per-USD rate used for the conversion
    #[sea_orm(column_type = "Decimal(Some((18, 6)))")]
    pub exchange_rate: Decimal,
    pub price_date: Date,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub currency: String,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
