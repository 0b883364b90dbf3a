use std::net::SocketAddr;

use route_server::cache::{CacheConfig, CachedDirections};
use route_server::directions::{
    DirectionsClient, DirectionsConfig, DirectionsGateway, MockDirectionsClient,
};
use route_server::engine::{EngineConfig, RateTable, RouteEngine};
use route_server::settings::Settings;
use route_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::from_env().expect("Failed to read settings");

    let rates = match &settings.rates_file {
        Some(path) => {
            let json = std::fs::read_to_string(path).expect("Failed to read rate table");
            RateTable::from_json(&json).expect("Failed to parse rate table")
        }
        None => RateTable::default(),
    };
    let engine_config =
        EngineConfig::with_rates(rates).with_concurrent_queries(settings.concurrent_queries);

    let cache_config = CacheConfig::default();

    match &settings.mock_dir {
        Some(dir) => {
            let mock = MockDirectionsClient::new(dir).expect("Failed to load mock directions");
            info!(
                dir = %dir.display(),
                pairs = mock.pair_count(),
                "serving directions from fixtures"
            );
            let gateway = CachedDirections::new(mock, &cache_config);
            serve(gateway, engine_config, settings.addr).await;
        }
        None => {
            let api_key = settings.api_key.clone().unwrap_or_else(|| {
                warn!("GOOGLE_MAPS_API_KEY not set. Directions calls will fail.");
                String::new()
            });
            let client = DirectionsClient::new(DirectionsConfig::new(api_key))
                .expect("Failed to create directions client");
            let gateway = CachedDirections::new(client, &cache_config);
            serve(gateway, engine_config, settings.addr).await;
        }
    }
}

async fn serve<G>(gateway: G, config: EngineConfig, addr: SocketAddr)
where
    G: DirectionsGateway + 'static,
{
    let state = AppState::new(RouteEngine::new(gateway, config));
    let app = create_router(state);

    info!("Route comparison server listening on http://{addr}");
    info!("  GET  /health      - Health check");
    info!("  POST /api/routes  - Compare transport options (?sort=time|cost|environmental)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
