// src/lib.rs

use sea_orm::DatabaseConnection;
use services::exchange_rate::ExchangeRateService;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub exchange_rates: ExchangeRateService,
}

pub mod entities {
    pub mod prelude;
    pub mod app_settings;
    pub mod price_history;
    pub mod purchases;
    pub mod tasting_notes;
    pub mod whiskies;
}

pub mod services {
    pub mod collection;
    pub mod exchange_rate;
    pub mod grid_layout;
    pub mod pricing;
    pub mod settings;
}

pub mod models {
    pub mod collection;
    pub mod layout;
    pub mod price_history;
    pub mod purchase;
    pub mod settings;
    pub mod tasting_note;
    pub mod whiskey;
}

pub mod handlers {
    pub mod collection;
    pub mod layout;
    pub mod price_history;
    pub mod purchase;
    pub mod settings;
    pub mod tasting_note;
    pub mod whiskey;
}
