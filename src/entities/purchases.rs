//! SeaORM Entity for bottle purchases
//!
//! One row per physical bottle acquired. References a whiskey by id;
//! referential integrity is enforced at the application level (cascading
//! deletes are client-driven, children first).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub whiskey_id: i32,
    pub purchase_date: Date,
    pub store: Option<String>,
    /// Final price actually paid, after discounts
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub final_price: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub discount_basic: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub discount_coupon: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub discount_membership: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub discount_event: Option<Decimal>,
    pub discount_currency: Option<String>,
    /// Local-currency-per-USD rate in effect at purchase time
    #[sea_orm(column_type = "Decimal(Some((18, 6)))", nullable)]
    pub exchange_rate: Option<Decimal>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
