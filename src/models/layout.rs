use serde::{Deserialize, Serialize};

use crate::services::grid_layout::GridLayout;

#[derive(Debug, Clone, Deserialize)]
pub struct GridLayoutQuery {
    pub viewport_width: f64,
    /// 0 when the sidebar is collapsed
    pub sidebar_width: Option<f64>,
    pub chrome_padding: Option<f64>,
    pub card_min_width: Option<f64>,
    pub card_max_width: Option<f64>,
    pub card_gap: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridLayoutResponse {
    pub columns: u32,
    pub column_width: f64,
    pub available_width: f64,
}

impl From<GridLayout> for GridLayoutResponse {
    fn from(layout: GridLayout) -> Self {
        Self {
            columns: layout.columns,
            column_width: layout.column_width,
            available_width: layout.available_width,
        }
    }
}
