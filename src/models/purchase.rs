use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::purchases;

#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseListQuery {
    pub whiskey_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseRequest {
    pub whiskey_id: i32,
    pub purchase_date: NaiveDate,
    pub store: Option<String>,
    pub final_price: Option<Decimal>,
    pub discount_basic: Option<Decimal>,
    pub discount_coupon: Option<Decimal>,
    pub discount_membership: Option<Decimal>,
    pub discount_event: Option<Decimal>,
    pub discount_currency: Option<String>,
    pub exchange_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePurchaseRequest {
    pub purchase_date: Option<NaiveDate>,
    pub store: Option<String>,
    pub final_price: Option<Decimal>,
    pub discount_basic: Option<Decimal>,
    pub discount_coupon: Option<Decimal>,
    pub discount_membership: Option<Decimal>,
    pub discount_event: Option<Decimal>,
    pub discount_currency: Option<String>,
    pub exchange_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseResponse {
    pub id: i32,
    pub whiskey_id: i32,
    pub purchase_date: NaiveDate,
    pub store: Option<String>,
    pub final_price: Option<Decimal>,
    pub discount_basic: Option<Decimal>,
    pub discount_coupon: Option<Decimal>,
    pub discount_membership: Option<Decimal>,
    pub discount_event: Option<Decimal>,
    pub discount_currency: Option<String>,
    pub exchange_rate: Option<Decimal>,
}

impl From<purchases::Model> for PurchaseResponse {
    fn from(p: purchases::Model) -> Self {
        Self {
            id: p.id,
            whiskey_id: p.whiskey_id,
            purchase_date: p.purchase_date,
            store: p.store,
            final_price: p.final_price,
            discount_basic: p.discount_basic,
            discount_coupon: p.discount_coupon,
            discount_membership: p.discount_membership,
            discount_event: p.discount_event,
            discount_currency: p.discount_currency,
            exchange_rate: p.exchange_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<PurchaseResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletePurchaseResponse {
    pub deleted_purchase_id: i32,
    pub deleted_tasting_notes: u64,
}
