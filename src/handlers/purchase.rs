//! Purchase handlers
//!
//! A purchase must reference an existing whiskey at creation time.
//! Deleting a purchase cascades to its tasting notes (children first,
//! abort on failure).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder,
};
use tracing::{error, info, warn};

use crate::entities::{prelude::*, purchases, tasting_notes};
use crate::models::purchase::{
    CreatePurchaseRequest, DeletePurchaseResponse, PurchaseListQuery, PurchaseListResponse,
    PurchaseResponse, UpdatePurchaseRequest,
};
use crate::models::whiskey::ErrorResponse;
use crate::AppState;

fn db_error(e: sea_orm::DbErr) -> (StatusCode, Json<ErrorResponse>) {
    error!(error = %e, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Database error: {}", e),
        }),
    )
}

fn not_found(id: i32) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Purchase {} not found", id),
        }),
    )
}

/// GET /api/purchases
pub async fn list_purchases(
    State(state): State<AppState>,
    Query(query): Query<PurchaseListQuery>,
) -> Result<Json<PurchaseListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut select = Purchases::find().order_by(purchases::Column::PurchaseDate, Order::Desc);

    if let Some(whiskey_id) = query.whiskey_id {
        select = select.filter(purchases::Column::WhiskeyId.eq(whiskey_id));
    }

    let purchases = select.all(&state.db).await.map_err(db_error)?;

    Ok(Json(PurchaseListResponse {
        purchases: purchases.into_iter().map(PurchaseResponse::from).collect(),
    }))
}

/// POST /api/purchases
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(payload): Json<CreatePurchaseRequest>,
) -> Result<(StatusCode, Json<PurchaseResponse>), (StatusCode, Json<ErrorResponse>)> {
    // The referenced whiskey must exist at creation time
    let whiskey = Whiskies::find_by_id(payload.whiskey_id)
        .one(&state.db)
        .await
        .map_err(db_error)?;

    if whiskey.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Whiskey {} does not exist", payload.whiskey_id),
            }),
        ));
    }

    let new_purchase = purchases::ActiveModel {
        whiskey_id: Set(payload.whiskey_id),
        purchase_date: Set(payload.purchase_date),
        store: Set(payload.store),
        final_price: Set(payload.final_price),
        discount_basic: Set(payload.discount_basic),
        discount_coupon: Set(payload.discount_coupon),
        discount_membership: Set(payload.discount_membership),
        discount_event: Set(payload.discount_event),
        discount_currency: Set(payload.discount_currency),
        exchange_rate: Set(payload.exchange_rate),
        created_at: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let result = new_purchase.insert(&state.db).await.map_err(db_error)?;
    info!(
        purchase_id = result.id,
        whiskey_id = result.whiskey_id,
        "Purchase created"
    );

    Ok((StatusCode::CREATED, Json(PurchaseResponse::from(result))))
}

/// PUT /api/purchases/{id}
pub async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePurchaseRequest>,
) -> Result<Json<PurchaseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let purchase = Purchases::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(id))?;

    let mut active = purchase.into_active_model();

    if let Some(v) = payload.purchase_date {
        active.purchase_date = Set(v);
    }
    if let Some(v) = payload.store {
        active.store = Set(Some(v));
    }
    if let Some(v) = payload.final_price {
        active.final_price = Set(Some(v));
    }
    if let Some(v) = payload.discount_basic {
        active.discount_basic = Set(Some(v));
    }
    if let Some(v) = payload.discount_coupon {
        active.discount_coupon = Set(Some(v));
    }
    if let Some(v) = payload.discount_membership {
        active.discount_membership = Set(Some(v));
    }
    if let Some(v) = payload.discount_event {
        active.discount_event = Set(Some(v));
    }
    if let Some(v) = payload.discount_currency {
        active.discount_currency = Set(Some(v));
    }
    if let Some(v) = payload.exchange_rate {
        active.exchange_rate = Set(Some(v));
    }

    let result = active.update(&state.db).await.map_err(db_error)?;

    Ok(Json(PurchaseResponse::from(result)))
}

/// DELETE /api/purchases/{id}
///
/// Deletes the purchase's tasting notes first; a note-delete failure
/// aborts the purchase delete.
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletePurchaseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let purchase = Purchases::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(id))?;

    let deleted_notes = TastingNotes::delete_many()
        .filter(tasting_notes::Column::PurchaseId.eq(id))
        .exec(&state.db)
        .await
        .map_err(|e| {
            warn!(
                purchase_id = id,
                error = %e,
                "Cascade aborted: failed to delete tasting notes"
            );
            db_error(e)
        })?
        .rows_affected;

    Purchases::delete_by_id(purchase.id)
        .exec(&state.db)
        .await
        .map_err(db_error)?;

    info!(purchase_id = id, deleted_notes, "Purchase deleted with cascade");

    Ok(Json(DeletePurchaseResponse {
        deleted_purchase_id: id,
        deleted_tasting_notes: deleted_notes,
    }))
}
