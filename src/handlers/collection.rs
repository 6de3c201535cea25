//! Collection view handlers
//!
//! Assemble the display-ready collection: purchases (date descending), the
//! whiskey lookup in one query, and per-purchase tasting notes fetched
//! concurrently. A failed note sub-query degrades that one item to zeroed
//! tasting statistics instead of failing the whole view.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use futures_util::future::join_all;
use sea_orm::{ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use tracing::{error, info, warn};

use crate::entities::{prelude::*, purchases, tasting_notes, whiskies};
use crate::models::collection::{
    CollectionItemResponse, CollectionResponse, CollectionSummaryResponse,
};
use crate::models::whiskey::ErrorResponse;
use crate::services::collection::{self, CollectionItem};
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

async fn load_collection_items(
    state: &AppState,
) -> Result<Vec<CollectionItem>, (StatusCode, Json<ErrorResponse>)> {
    let purchase_rows = Purchases::find()
        .order_by(purchases::Column::PurchaseDate, Order::Desc)
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let whiskey_ids: Vec<i32> = purchase_rows
        .iter()
        .map(|p| p.whiskey_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let whiskey_rows = Whiskies::find()
        .filter(whiskies::Column::Id.is_in(whiskey_ids))
        .all(&state.db)
        .await
        .map_err(db_error)?;

    let whiskey_by_id: HashMap<i32, whiskies::Model> =
        whiskey_rows.into_iter().map(|w| (w.id, w)).collect();

    // Fan out the per-purchase note queries; no ordering dependency exists
    // between them.
    let note_futures = purchase_rows.iter().map(|p| {
        let db = state.db.clone();
        let purchase_id = p.id;
        async move {
            let result = TastingNotes::find()
                .filter(tasting_notes::Column::PurchaseId.eq(purchase_id))
                .all(&db)
                .await;
            (purchase_id, result)
        }
    });

    let mut notes_by_purchase: HashMap<i32, Vec<tasting_notes::Model>> = HashMap::new();
    for (purchase_id, result) in join_all(note_futures).await {
        match result {
            Ok(notes) => {
                notes_by_purchase.insert(purchase_id, notes);
            }
            Err(e) => {
                // Partial results over total failure: this item proceeds
                // with zeroed tasting statistics.
                warn!(purchase_id, error = %e, "Tasting note sub-query failed");
                notes_by_purchase.insert(purchase_id, Vec::new());
            }
        }
    }

    let today = Utc::now().date_naive();
    Ok(collection::build_collection_items(
        &purchase_rows,
        &whiskey_by_id,
        &notes_by_purchase,
        today,
    ))
}

/// GET /api/collection
pub async fn get_collection(
    State(state): State<AppState>,
) -> Result<Json<CollectionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let items = load_collection_items(&state).await?;
    info!(items = items.len(), "Collection assembled");

    Ok(Json(CollectionResponse {
        items: items.into_iter().map(CollectionItemResponse::from).collect(),
    }))
}

/// GET /api/collection/summary
pub async fn get_collection_summary(
    State(state): State<AppState>,
) -> Result<Json<CollectionSummaryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let items = load_collection_items(&state).await?;
    let summary = collection::summarize(&items);

    Ok(Json(CollectionSummaryResponse::from(summary)))
}
