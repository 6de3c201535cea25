//! SeaORM Entity for persisted application settings (single row, id = 1)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub auto_update_enabled: bool,
    /// Alert when a registered price exceeds this threshold (local currency)
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub price_alert_threshold: Option<Decimal>,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
