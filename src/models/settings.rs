use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::app_settings;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSettingsRequest {
    pub auto_update_enabled: bool,
    pub price_alert_threshold: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub auto_update_enabled: bool,
    pub price_alert_threshold: Option<Decimal>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<app_settings::Model> for SettingsResponse {
    fn from(s: app_settings::Model) -> Self {
        Self {
            auto_update_enabled: s.auto_update_enabled,
            price_alert_threshold: s.price_alert_threshold,
            updated_at: s.updated_at.map(|t| t.with_timezone(&Utc)),
        }
    }
}
