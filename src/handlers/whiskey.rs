//! Whiskey catalog handlers
//!
//! CRUD for the catalog. Deleting a whiskey cascades at the application
//! level: tasting notes of its purchases first, then the purchases, then
//! the whiskey itself. A failed child delete aborts the rest.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{error, info, warn};

use crate::entities::{prelude::*, purchases, tasting_notes, whiskies};
use crate::models::whiskey::{
    CreateWhiskeyRequest, DeleteWhiskeyResponse, ErrorResponse, UpdateWhiskeyRequest,
    WhiskeyListQuery, WhiskeyListResponse, WhiskeyResponse,
};
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
            error: format!("Whiskey {} not found", id),
        }),
    )
}

/// GET /api/whiskies
pub async fn list_whiskies(
    State(state): State<AppState>,
    Query(query): Query<WhiskeyListQuery>,
) -> Result<Json<WhiskeyListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut select = Whiskies::find();

    if let Some(brand) = &query.brand {
        select = select.filter(whiskies::Column::Brand.eq(brand));
    }
    if let Some(whiskey_type) = &query.whiskey_type {
        select = select.filter(whiskies::Column::WhiskeyType.eq(whiskey_type));
    }

    select = match query.sort.as_deref() {
        Some("name") => select.order_by(whiskies::Column::Name, Order::Asc),
        _ => select.order_by(whiskies::Column::CreatedAt, Order::Desc),
    };

    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    let whiskies = select.all(&state.db).await.map_err(db_error)?;

    Ok(Json(WhiskeyListResponse {
        whiskies: whiskies.into_iter().map(WhiskeyResponse::from).collect(),
    }))
}

/// GET /api/whiskies/{id}
pub async fn get_whiskey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WhiskeyResponse>, (StatusCode, Json<ErrorResponse>)> {
    let whiskey = Whiskies::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(WhiskeyResponse::from(whiskey)))
}

/// POST /api/whiskies
pub async fn create_whiskey(
    State(state): State<AppState>,
    Json(payload): Json<CreateWhiskeyRequest>,
) -> Result<(StatusCode, Json<WhiskeyResponse>), (StatusCode, Json<ErrorResponse>)> {
    if payload.name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "name must not be empty".to_string(),
            }),
        ));
    }

    let new_whiskey = whiskies::ActiveModel {
        name: Set(payload.name),
        name_en: Set(payload.name_en),
        name_ko: Set(payload.name_ko),
        brand: Set(payload.brand),
        whiskey_type: Set(payload.whiskey_type),
        age_years: Set(payload.age_years),
        volume_ml: Set(payload.volume_ml),
        abv: Set(payload.abv),
        region: Set(payload.region),
        distillery: Set(payload.distillery),
        cask_info: Set(payload.cask_info),
        description: Set(payload.description),
        reference_url: Set(payload.reference_url),
        image_url: Set(payload.image_url),
        created_at: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let result = new_whiskey.insert(&state.db).await.map_err(db_error)?;
    info!(whiskey_id = result.id, name = %result.name, "Whiskey created");

    Ok((StatusCode::CREATED, Json(WhiskeyResponse::from(result))))
}

/// PUT /api/whiskies/{id}
pub async fn update_whiskey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWhiskeyRequest>,
) -> Result<Json<WhiskeyResponse>, (StatusCode, Json<ErrorResponse>)> {
    let whiskey = Whiskies::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(id))?;

    let mut active = whiskey.into_active_model();

    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(v) = payload.name_en {
        active.name_en = Set(Some(v));
    }
    if let Some(v) = payload.name_ko {
        active.name_ko = Set(Some(v));
    }
    if let Some(v) = payload.brand {
        active.brand = Set(Some(v));
    }
    if let Some(v) = payload.whiskey_type {
        active.whiskey_type = Set(Some(v));
    }
    if let Some(v) = payload.age_years {
        active.age_years = Set(Some(v));
    }
    if let Some(v) = payload.volume_ml {
        active.volume_ml = Set(Some(v));
    }
    if let Some(v) = payload.abv {
        active.abv = Set(Some(v));
    }
    if let Some(v) = payload.region {
        active.region = Set(Some(v));
    }
    if let Some(v) = payload.distillery {
        active.distillery = Set(Some(v));
    }
    if let Some(v) = payload.cask_info {
        active.cask_info = Set(Some(v));
    }
    if let Some(v) = payload.description {
        active.description = Set(Some(v));
    }
    if let Some(v) = payload.reference_url {
        active.reference_url = Set(Some(v));
    }
    if let Some(v) = payload.image_url {
        active.image_url = Set(Some(v));
    }

    let result = active.update(&state.db).await.map_err(db_error)?;

    Ok(Json(WhiskeyResponse::from(result)))
}

/// DELETE /api/whiskies/{id}
///
/// Sequential client-driven cascade: notes -> purchases -> whiskey.
/// There is no transaction; a failure mid-cascade leaves already-deleted
/// children gone and reports the error.
pub async fn delete_whiskey(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteWhiskeyResponse>, (StatusCode, Json<ErrorResponse>)> {
    let whiskey = Whiskies::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(id))?;

    let owned_purchases = Purchases::find()
        .filter(purchases::Column::WhiskeyId.eq(id))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let mut deleted_notes: u64 = 0;
    for purchase in &owned_purchases {
        let res = TastingNotes::delete_many()
            .filter(tasting_notes::Column::PurchaseId.eq(purchase.id))
            .exec(&state.db)
            .await
            .map_err(|e| {
                warn!(
                    whiskey_id = id,
                    purchase_id = purchase.id,
                    error = %e,
                    "Cascade aborted: failed to delete tasting notes"
                );
                db_error(e)
            })?;
        deleted_notes += res.rows_affected;
    }

    let deleted_purchases = Purchases::delete_many()
        .filter(purchases::Column::WhiskeyId.eq(id))
        .exec(&state.db)
        .await
        .map_err(|e| {
            warn!(whiskey_id = id, error = %e, "Cascade aborted: failed to delete purchases");
            db_error(e)
        })?
        .rows_affected;

    Whiskies::delete_by_id(whiskey.id)
        .exec(&state.db)
        .await
        .map_err(db_error)?;

    info!(
        whiskey_id = id,
        deleted_purchases, deleted_notes, "Whiskey deleted with cascade"
    );

    Ok(Json(DeleteWhiskeyResponse {
        deleted_whiskey_id: id,
        deleted_purchases,
        deleted_tasting_notes: deleted_notes,
    }))
}
