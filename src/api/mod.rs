mod handlers;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{ConfigError, ServerConfig};
use crate::store::RegistryStore;

/// Router with permissive CORS, used for local runs and tests.
pub fn create_router(store: RegistryStore) -> Router {
    build_router(store, CorsLayer::permissive())
}

/// Router with CORS restricted to the configured origins, if any.
pub fn create_router_with_config(
    store: RegistryStore,
    config: &ServerConfig,
) -> Result<Router, ConfigError> {
    let cors = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|o| {
                    HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidCorsOrigin(o.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
        }
        None => CorsLayer::permissive(),
    };

    Ok(build_router(store, cors))
}

fn build_router(store: RegistryStore, cors: CorsLayer) -> Router {
    let api = Router::new()
        // Vessels
        .route("/vessels", get(handlers::list_vessels))
        .route("/vessels", post(handlers::register_vessel))
        .route("/vessels/capacity", get(handlers::get_total_capacity))
        .route("/vessels/{registration_code}", get(handlers::get_vessel))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}
