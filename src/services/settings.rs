//! Persisted application settings
//!
//! Single-row table (id = 1) holding the auto-update flag and the price
//! alert threshold. Load inserts defaults on first use; save and reset
//! return the new row instead of mutating any ambient state.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::entities::{app_settings, prelude::*};

const SETTINGS_ROW_ID: i32 = 1;

/// Load the settings row, creating it with defaults when missing.
pub async fn load(
    db: &DatabaseConnection,
) -> Result<app_settings::Model, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(settings) = AppSettings::find_by_id(SETTINGS_ROW_ID).one(db).await? {
        return Ok(settings);
    }

    tracing::info!("No settings row found, inserting defaults");
    let defaults = app_settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        auto_update_enabled: Set(false),
        price_alert_threshold: Set(None),
        updated_at: Set(Some(Utc::now().into())),
    };
    Ok(defaults.insert(db).await?)
}

/// Overwrite the settings row and return the stored result.
pub async fn save(
    db: &DatabaseConnection,
    auto_update_enabled: bool,
    price_alert_threshold: Option<Decimal>,
) -> Result<app_settings::Model, Box<dyn std::error::Error + Send + Sync>> {
    // Make sure the row exists before updating it
    load(db).await?;

    let updated = app_settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        auto_update_enabled: Set(auto_update_enabled),
        price_alert_threshold: Set(price_alert_threshold),
        updated_at: Set(Some(Utc::now().into())),
    };
    Ok(updated.update(db).await?)
}

/// Reset the settings row to defaults and return it.
pub async fn reset(
    db: &DatabaseConnection,
) -> Result<app_settings::Model, Box<dyn std::error::Error + Send + Sync>> {
    save(db, false, None).await
}
