use axum::{
    routing::{get, post, put},
    Router,
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maltcellar_backend::handlers;
use maltcellar_backend::services::exchange_rate::ExchangeRateService;
use maltcellar_backend::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,maltcellar_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let exchange_rate_url = env::var("EXCHANGE_RATE_API_URL")
        .unwrap_or_else(|_| "https://open.er-api.com/v6".to_string());
    let exchange_rates = ExchangeRateService::new(exchange_rate_url, 600);

    let state = AppState { db, exchange_rates };

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .route(
            "/api/whiskies",
            get(handlers::whiskey::list_whiskies).post(handlers::whiskey::create_whiskey),
        )
        .route(
            "/api/whiskies/{id}",
            get(handlers::whiskey::get_whiskey)
                .put(handlers::whiskey::update_whiskey)
                .delete(handlers::whiskey::delete_whiskey),
        )
        .route(
            "/api/whiskies/{id}/prices",
            get(handlers::price_history::list_price_history)
                .post(handlers::price_history::register_price),
        )
        .route(
            "/api/prices/refresh-usd",
            post(handlers::price_history::refresh_usd_prices),
        )
        .route(
            "/api/purchases",
            get(handlers::purchase::list_purchases).post(handlers::purchase::create_purchase),
        )
        .route(
            "/api/purchases/{id}",
            put(handlers::purchase::update_purchase).delete(handlers::purchase::delete_purchase),
        )
        .route(
            "/api/purchases/{id}/tastings",
            get(handlers::tasting_note::list_tastings_for_purchase),
        )
        .route(
            "/api/tastings",
            post(handlers::tasting_note::create_tasting_note),
        )
        .route(
            "/api/tastings/{id}",
            put(handlers::tasting_note::update_tasting_note)
                .delete(handlers::tasting_note::delete_tasting_note),
        )
        .route("/api/collection", get(handlers::collection::get_collection))
        .route(
            "/api/collection/summary",
            get(handlers::collection::get_collection_summary),
        )
        .route("/api/layout/grid", get(handlers::layout::get_grid_layout))
        .route(
            "/api/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .route(
            "/api/settings/reset",
            post(handlers::settings::reset_settings),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(
        "Server listening on {}",
        listener.local_addr().expect("listener has a local addr")
    );

    axum::serve(listener, app).await.expect("Server error");
}

async fn health() -> &'static str {
    "maltcellar backend is up"
}
