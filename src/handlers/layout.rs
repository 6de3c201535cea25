//! Grid layout handler
//!
//! Stateless: the client reports its measurements and gets back the column
//! count and card width to force onto the grid.

use axum::{extract::Query, Json};

use crate::models::layout::{GridLayoutQuery, GridLayoutResponse};
use crate::services::grid_layout::{
    self, CARD_GAP, CARD_MAX_WIDTH, CARD_MIN_WIDTH, CHROME_PADDING,
};

/// GET /api/layout/grid
pub async fn get_grid_layout(Query(query): Query<GridLayoutQuery>) -> Json<GridLayoutResponse> {
    let layout = grid_layout::compute_layout(
        query.viewport_width,
        query.sidebar_width.unwrap_or(0.0),
        query.chrome_padding.unwrap_or(CHROME_PADDING),
        query.card_min_width.unwrap_or(CARD_MIN_WIDTH),
        query.card_max_width.unwrap_or(CARD_MAX_WIDTH),
        query.card_gap.unwrap_or(CARD_GAP),
    );

    Json(GridLayoutResponse::from(layout))
}
