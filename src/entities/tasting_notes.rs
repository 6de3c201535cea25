//! SeaORM Entity for tasting sessions
//!
//! `rating` is nullable on purpose: an unrated tasting is not a
//! zero-rated tasting, and the aggregator keeps the two apart.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasting_notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub purchase_id: i32,
    pub tasting_date: Date,
    /// 0-10 scale
    #[sea_orm(column_type = "Double", nullable)]
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub nose: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub palate: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub finish: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    /// Amount consumed on this occasion, in ml
    #[sea_orm(column_type = "Double", nullable)]
    pub amount_consumed_ml: Option<f64>,
    pub created_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
