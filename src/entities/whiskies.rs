//! SeaORM Entity for the whiskey catalog
//!
//! Most attributes are optional: the aggregation layer relies on the
//! present/absent distinction (e.g. "no brand" buckets as Unknown).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "whiskies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub brand: Option<String>,
    /// single malt / blended / bourbon / ...
    pub whiskey_type: Option<String>,
    pub age_years: Option<i32>,
    /// Bottle volume in ml
    pub volume_ml: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub abv: Option<f64>,
    pub region: Option<String>,
    pub distillery: Option<String>,
    pub cask_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub reference_url: Option<String>,
    pub image_url: Option<String>,
    /// Denormalized cache of the latest price_history entry (local currency)
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub current_price: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub current_price_usd: Option<Decimal>,
    pub price_updated_at: Option<DateTimeWithTimeZone>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
