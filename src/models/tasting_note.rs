use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::tasting_notes;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTastingNoteRequest {
    pub purchase_id: i32,
    pub tasting_date: NaiveDate,
    /// 0-10; omit for an unrated tasting
    pub rating: Option<f64>,
    pub nose: Option<String>,
    pub palate: Option<String>,
    pub finish: Option<String>,
    pub notes: Option<String>,
    pub amount_consumed_ml: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTastingNoteRequest {
    pub tasting_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub nose: Option<String>,
    pub palate: Option<String>,
    pub finish: Option<String>,
    pub notes: Option<String>,
    pub amount_consumed_ml: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TastingNoteResponse {
    pub id: i32,
    pub purchase_id: i32,
    pub tasting_date: NaiveDate,
    pub rating: Option<f64>,
    pub nose: Option<String>,
    pub palate: Option<String>,
    pub finish: Option<String>,
    pub notes: Option<String>,
    pub amount_consumed_ml: Option<f64>,
}

impl From<tasting_notes::Model> for TastingNoteResponse {
    fn from(n: tasting_notes::Model) -> Self {
        Self {
            id: n.id,
            purchase_id: n.purchase_id,
            tasting_date: n.tasting_date,
            rating: n.rating,
            nose: n.nose,
            palate: n.palate,
            finish: n.finish,
            notes: n.notes,
            amount_consumed_ml: n.amount_consumed_ml,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TastingNoteListResponse {
    pub tasting_notes: Vec<TastingNoteResponse>,
}
