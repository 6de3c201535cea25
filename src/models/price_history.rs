use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::price_history;

#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistoryQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPriceRequest {
    /// Local-currency price; must be present and positive
    pub price: Option<Decimal>,
    /// Defaults to today
    pub price_date: Option<NaiveDate>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    /// Defaults to KRW
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceEntryResponse {
    pub id: i64,
    pub whiskey_id: i32,
    pub price: Decimal,
    pub price_usd: Decimal,
    pub exchange_rate: Decimal,
    pub price_date: NaiveDate,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub currency: String,
}

impl From<price_history::Model> for PriceEntryResponse {
    fn from(e: price_history::Model) -> Self {
        Self {
            id: e.id,
            whiskey_id: e.whiskey_id,
            price: e.price,
            price_usd: e.price_usd,
            exchange_rate: e.exchange_rate,
            price_date: e.price_date,
            source: e.source,
            source_url: e.source_url,
            currency: e.currency,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceHistoryResponse {
    pub whiskey_id: i32,
    pub entries: Vec<PriceEntryResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshUsdResponseItem {
    pub whiskey_id: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshUsdResponse {
    pub exchange_rate: Decimal,
    pub updated: u64,
    pub failed: Vec<RefreshUsdResponseItem>,
}
