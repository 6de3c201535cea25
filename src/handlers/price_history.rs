//! Price history handlers
//!
//! Registration validates the price before any network call, fetches the
//! exchange rate once, appends to the immutable price_history log and then
//! refreshes the whiskey's denormalized current-price columns.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{error, info, warn};

use crate::entities::{prelude::*, price_history};
use crate::models::price_history::{
    PriceEntryResponse, PriceHistoryQuery, PriceHistoryResponse, RefreshUsdResponse,
    RefreshUsdResponseItem, RegisterPriceRequest,
};
use crate::models::whiskey::ErrorResponse;
use crate::services::pricing;
use crate::AppState;

const DEFAULT_CURRENCY: &str = "KRW";

fn db_error(e: sea_orm::DbErr) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %e, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Database error: {}", e),
        }),
    )
}

/// GET /api/whiskies/{id}/prices
pub async fn list_price_history(
    State(state): State<AppState>,
    Path(whiskey_id): Path<i32>,
    Query(query): Query<PriceHistoryQuery>,
) -> Result<Json<PriceHistoryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut select = PriceHistory::find()
        .filter(price_history::Column::WhiskeyId.eq(whiskey_id))
        .order_by(price_history::Column::PriceDate, Order::Desc);

    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    let entries = select.all(&state.db).await.map_err(db_error)?;

    Ok(Json(PriceHistoryResponse {
        whiskey_id,
        entries: entries.into_iter().map(PriceEntryResponse::from).collect(),
    }))
}

/// POST /api/whiskies/{id}/prices
///
/// Validation happens before the exchange-rate fetch: an empty or
/// non-positive price never touches the network.
pub async fn register_price(
    State(state): State<AppState>,
    Path(whiskey_id): Path<i32>,
    Json(payload): Json<RegisterPriceRequest>,
) -> Result<(StatusCode, Json<PriceEntryResponse>), (StatusCode, Json<ErrorResponse>)> {
    let price = match payload.price {
        Some(p) if p > Decimal::ZERO => p,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "price is required and must be positive".to_string(),
                }),
            ));
        }
    };

    let whiskey = Whiskies::find_by_id(whiskey_id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Whiskey {} not found", whiskey_id),
                }),
            )
        })?;

    let rate = state.exchange_rates.get_krw_per_usd().await.map_err(|e| {
        error!(error = %e, "Exchange rate fetch failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("Exchange rate unavailable: {}", e),
            }),
        )
    })?;

    let price_usd = pricing::convert_to_usd(price, rate).map_err(|e| {
        error!(error = %e, "Exchange rate rejected");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    let price_date = payload.price_date.unwrap_or_else(|| Utc::now().date_naive());

    let entry = price_history::ActiveModel {
        whiskey_id: Set(whiskey_id),
        price: Set(price),
        price_usd: Set(price_usd),
        exchange_rate: Set(rate),
        price_date: Set(price_date),
        source: Set(payload.source),
        source_url: Set(payload.source_url),
        currency: Set(payload
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())),
        created_at: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let stored = entry.insert(&state.db).await.map_err(db_error)?;

    // Refresh the denormalized cache on the whiskey row
    let mut active = whiskey.into_active_model();
    active.current_price = Set(Some(price));
    active.current_price_usd = Set(Some(price_usd));
    active.price_updated_at = Set(Some(Utc::now().into()));
    active.update(&state.db).await.map_err(db_error)?;

    info!(
        whiskey_id,
        price = %price,
        price_usd = %price_usd,
        "Price registered"
    );

    Ok((StatusCode::CREATED, Json(PriceEntryResponse::from(stored))))
}

/// POST /api/prices/refresh-usd
///
/// Bulk action: one rate fetch, then recompute current_price_usd for every
/// whiskey that has a current price. Per-item failures are collected, the
/// batch keeps going.
pub async fn refresh_usd_prices(
    State(state): State<AppState>,
) -> Result<Json<RefreshUsdResponse>, (StatusCode, Json<ErrorResponse>)> {
    let rate = state.exchange_rates.get_krw_per_usd().await.map_err(|e| {
        error!(error = %e, "Exchange rate fetch failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("Exchange rate unavailable: {}", e),
            }),
        )
    })?;

    let whiskies_with_price = Whiskies::find()
        .filter(crate::entities::whiskies::Column::CurrentPrice.is_not_null())
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let mut updated: u64 = 0;
    let mut failed = Vec::new();

    for whiskey in whiskies_with_price {
        let whiskey_id = whiskey.id;
        let Some(price) = whiskey.current_price else {
            continue;
        };

        let price_usd = match pricing::convert_to_usd(price, rate) {
            Ok(v) => v,
            Err(e) => {
                failed.push(RefreshUsdResponseItem {
                    whiskey_id,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let mut active = whiskey.into_active_model();
        active.current_price_usd = Set(Some(price_usd));
        active.price_updated_at = Set(Some(Utc::now().into()));

        match active.update(&state.db).await {
            Ok(_) => updated += 1,
            Err(e) => {
                warn!(whiskey_id, error = %e, "Failed to update USD price");
                failed.push(RefreshUsdResponseItem {
                    whiskey_id,
                    message: format!("Database error: {}", e),
                });
            }
        }
    }

    info!(updated, failed = failed.len(), rate = %rate, "Bulk USD refresh finished");

    Ok(Json(RefreshUsdResponse {
        exchange_rate: rate,
        updated,
        failed,
    }))
}
