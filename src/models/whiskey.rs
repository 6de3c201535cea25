use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::whiskies;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhiskeyListQuery {
    pub brand: Option<String>,
    pub whiskey_type: Option<String>,
    /// "name" or "created_at" (default: created_at, newest first)
    pub sort: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWhiskeyRequest {
    pub name: String,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub brand: Option<String>,
    pub whiskey_type: Option<String>,
    pub age_years: Option<i32>,
    pub volume_ml: Option<i32>,
    pub abv: Option<f64>,
    pub region: Option<String>,
    pub distillery: Option<String>,
    pub cask_info: Option<String>,
    pub description: Option<String>,
    pub reference_url: Option<String>,
    pub image_url: Option<String>,
}

/// Fields present in the payload are updated; absent fields keep their
/// stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWhiskeyRequest {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub brand: Option<String>,
    pub whiskey_type: Option<String>,
    pub age_years: Option<i32>,
    pub volume_ml: Option<i32>,
    pub abv: Option<f64>,
    pub region: Option<String>,
    pub distillery: Option<String>,
    pub cask_info: Option<String>,
    pub description: Option<String>,
    pub reference_url: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WhiskeyResponse {
    pub id: i32,
    pub name: String,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub brand: Option<String>,
    pub whiskey_type: Option<String>,
    pub age_years: Option<i32>,
    pub volume_ml: Option<i32>,
    pub abv: Option<f64>,
    pub region: Option<String>,
    pub distillery: Option<String>,
    pub cask_info: Option<String>,
    pub description: Option<String>,
    pub reference_url: Option<String>,
    pub image_url: Option<String>,
    pub current_price: Option<Decimal>,
    pub current_price_usd: Option<Decimal>,
    pub price_updated_at: Option<DateTime<Utc>>,
}

impl From<whiskies::Model> for WhiskeyResponse {
    fn from(w: whiskies::Model) -> Self {
        Self {
            id: w.id,
            name: w.name,
            name_en: w.name_en,
            name_ko: w.name_ko,
            brand: w.brand,
            whiskey_type: w.whiskey_type,
            age_years: w.age_years,
            volume_ml: w.volume_ml,
            abv: w.abv,
            region: w.region,
            distillery: w.distillery,
            cask_info: w.cask_info,
            description: w.description,
            reference_url: w.reference_url,
            image_url: w.image_url,
            current_price: w.current_price,
            current_price_usd: w.current_price_usd,
            price_updated_at: w.price_updated_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WhiskeyListResponse {
    pub whiskies: Vec<WhiskeyResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteWhiskeyResponse {
    pub deleted_whiskey_id: i32,
    pub deleted_purchases: u64,
    pub deleted_tasting_notes: u64,
}
