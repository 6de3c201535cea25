use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::services::collection::{CollectionItem, CollectionSummary};
use crate::services::pricing;

#[derive(Debug, Clone, Serialize)]
pub struct PriceBandResponse {
    pub label: &'static str,
    pub fill: &'static str,
    pub border: &'static str,
}

/// The whiskey fields the collection card actually renders.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionWhiskeyResponse {
    pub id: i32,
    pub name: String,
    pub brand: Option<String>,
    pub whiskey_type: Option<String>,
    pub volume_ml: Option<i32>,
    pub image_url: Option<String>,
    pub current_price: Option<Decimal>,
    pub current_price_usd: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionItemResponse {
    pub purchase_id: i32,
    pub whiskey_id: i32,
    pub purchase_date: NaiveDate,
    /// None when the referenced whiskey no longer exists; the client
    /// renders a placeholder card
    pub whiskey: Option<CollectionWhiskeyResponse>,
    pub tasting_count: usize,
    pub average_rating: Option<f64>,
    pub last_tasted: Option<NaiveDate>,
    pub total_consumed_ml: f64,
    pub remaining_percentage: f64,
    pub airing_period: Option<String>,
    pub price_band: PriceBandResponse,
}

impl From<CollectionItem> for CollectionItemResponse {
    fn from(item: CollectionItem) -> Self {
        let band =
            pricing::classify_price_band(item.whiskey.as_ref().and_then(|w| w.current_price));

        Self {
            purchase_id: item.purchase.id,
            whiskey_id: item.purchase.whiskey_id,
            purchase_date: item.purchase.purchase_date,
            whiskey: item.whiskey.map(|w| CollectionWhiskeyResponse {
                id: w.id,
                name: w.name,
                brand: w.brand,
                whiskey_type: w.whiskey_type,
                volume_ml: w.volume_ml,
                image_url: w.image_url,
                current_price: w.current_price,
                current_price_usd: w.current_price_usd,
            }),
            tasting_count: item.tasting_count,
            average_rating: item.average_rating,
            last_tasted: item.last_tasted,
            total_consumed_ml: item.total_consumed_ml,
            remaining_percentage: item.remaining_percentage,
            airing_period: item.airing_period,
            price_band: PriceBandResponse {
                label: band.label,
                fill: band.fill,
                border: band.border,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    pub items: Vec<CollectionItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummaryResponse {
    pub total_items: usize,
    pub distinct_brands: usize,
    pub total_tastings: usize,
    pub avg_tastings_per_bottle: f64,
    pub avg_remaining_percentage: f64,
    pub rated_items: usize,
    pub average_rating: Option<f64>,
    pub brand_counts: HashMap<String, usize>,
    pub type_counts: HashMap<String, usize>,
}

impl From<CollectionSummary> for CollectionSummaryResponse {
    fn from(s: CollectionSummary) -> Self {
        Self {
            total_items: s.total_items,
            distinct_brands: s.distinct_brands,
            total_tastings: s.total_tastings,
            avg_tastings_per_bottle: s.avg_tastings_per_bottle,
            avg_remaining_percentage: s.avg_remaining_percentage,
            rated_items: s.rated_items,
            average_rating: s.average_rating,
            brand_counts: s.brand_counts,
            type_counts: s.type_counts,
        }
    }
}
