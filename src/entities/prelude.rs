pub use super::app_settings::Entity as AppSettings;
pub use super::price_history::Entity as PriceHistory;
pub use super::purchases::Entity as Purchases;
pub use super::tasting_notes::Entity as TastingNotes;
pub use super::whiskies::Entity as Whiskies;
