use axum::{extract::DefaultBodyLimit, routing::post, Router};
use configuration::Settings;
use market_client::{BudaClient, MarketApi};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;


/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub markets: Arc<dyn MarketApi>,
}

/// Assembles the application router around the given state. Split out from
/// `run_server` so tests can drive it in-process.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route(
            "/",
            post(handlers::value_portfolio).get(handlers::wrong_method),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, settings: &Settings) -> anyhow::Result<()> {
    let markets = BudaClient::new(&settings.buda);
    let app_state = Arc::new(AppState {
        markets: Arc::new(markets),
    });
    let app = build_router(app_state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
