//! Tasting note handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder,
};
use tracing::{error, info};

use crate::entities::{prelude::*, tasting_notes};
use crate::models::tasting_note::{
    CreateTastingNoteRequest, TastingNoteListResponse, TastingNoteResponse,
    UpdateTastingNoteRequest,
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

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

fn validate_rating(rating: Option<f64>) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    if let Some(r) = rating {
        if !(0.0..=10.0).contains(&r) {
            return Err(bad_request(format!(
                "rating must be between 0 and 10, got {}",
                r
            )));
        }
    }
    Ok(())
}

/// GET /api/purchases/{id}/tastings
pub async fn list_tastings_for_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<i32>,
) -> Result<Json<TastingNoteListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let notes = TastingNotes::find()
        .filter(tasting_notes::Column::PurchaseId.eq(purchase_id))
        .order_by(tasting_notes::Column::TastingDate, Order::Desc)
        .all(&state.db)
        .await
        .map_err(db_error)?;

    Ok(Json(TastingNoteListResponse {
        tasting_notes: notes.into_iter().map(TastingNoteResponse::from).collect(),
    }))
}

/// POST /api/tastings
pub async fn create_tasting_note(
    State(state): State<AppState>,
    Json(payload): Json<CreateTastingNoteRequest>,
) -> Result<(StatusCode, Json<TastingNoteResponse>), (StatusCode, Json<ErrorResponse>)> {
    validate_rating(payload.rating)?;

    let purchase = Purchases::find_by_id(payload.purchase_id)
        .one(&state.db)
        .await
        .map_err(db_error)?;

    if purchase.is_none() {
        return Err(bad_request(format!(
            "Purchase {} does not exist",
            payload.purchase_id
        )));
    }

    let new_note = tasting_notes::ActiveModel {
        purchase_id: Set(payload.purchase_id),
        tasting_date: Set(payload.tasting_date),
        rating: Set(payload.rating),
        nose: Set(payload.nose),
        palate: Set(payload.palate),
        finish: Set(payload.finish),
        notes: Set(payload.notes),
        amount_consumed_ml: Set(payload.amount_consumed_ml),
        created_at: Set(Some(Utc::now().into())),
        ..Default::default()
    };

    let result = new_note.insert(&state.db).await.map_err(db_error)?;
    info!(
        tasting_note_id = result.id,
        purchase_id = result.purchase_id,
        "Tasting note created"
    );

    Ok((StatusCode::CREATED, Json(TastingNoteResponse::from(result))))
}

/// PUT /api/tastings/{id}
pub async fn update_tasting_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTastingNoteRequest>,
) -> Result<Json<TastingNoteResponse>, (StatusCode, Json<ErrorResponse>)> {
    validate_rating(payload.rating)?;

    let note = TastingNotes::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Tasting note {} not found", id),
                }),
            )
        })?;

    let mut active = note.into_active_model();

    if let Some(v) = payload.tasting_date {
        active.tasting_date = Set(v);
    }
    if let Some(v) = payload.rating {
        active.rating = Set(Some(v));
    }
    if let Some(v) = payload.nose {
        active.nose = Set(Some(v));
    }
    if let Some(v) = payload.palate {
        active.palate = Set(Some(v));
    }
    if let Some(v) = payload.finish {
        active.finish = Set(Some(v));
    }
    if let Some(v) = payload.notes {
        active.notes = Set(Some(v));
    }
    if let Some(v) = payload.amount_consumed_ml {
        active.amount_consumed_ml = Set(Some(v));
    }

    let result = active.update(&state.db).await.map_err(db_error)?;

    Ok(Json(TastingNoteResponse::from(result)))
}

/// DELETE /api/tastings/{id}
pub async fn delete_tasting_note(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let result = TastingNotes::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(db_error)?;

    if result.rows_affected == 0 {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Tasting note {} not found", id),
            }),
        ));
    }

    info!(tasting_note_id = id, "Tasting note deleted");
    Ok(StatusCode::NO_CONTENT)
}
