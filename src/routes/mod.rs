pub mod health;
pub mod readings;
pub mod settings;

use axum::{Router, routing::get};

use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::service_status,
        health::healthz,
        readings::get_latest_reading,
        readings::get_history,
        readings::get_history_by_timespan,
        readings::create_reading,
        settings::get_settings,
        settings::update_settings,
    ),
    components(
        schemas(
            readings::ReadingResponse,
            readings::ReadingPayload,
            readings::CreateReadingResponse,
            settings::SettingsResponse,
            settings::SettingsPayload,
            settings::UpdateSettingsResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "readings", description = "Telemetry samples from the load-bank device"),
        (name = "settings", description = "Test-run configuration record"),
    ),
    info(
        title = "Loadbank Telemetry API",
        description = "Telemetry ingestion and settings API for a load-bank test device",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    // Everything the device and dashboard talk to lives under /api/readings,
    // including the settings record (historical URL layout the deployed
    // clients already use).
    let readings_routes = Router::new()
        .route(
            "/",
            get(readings::get_history).post(readings::create_reading),
        )
        .route("/latest", get(readings::get_latest_reading))
        .route("/history", get(readings::get_history))
        .route("/history/timespan", get(readings::get_history_by_timespan))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        );

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/", get(health::service_status))
        .route("/healthz", get(health::healthz))
        .nest("/api/readings", readings_routes)
        .merge(docs_routes)
        .layer(RequestBodyLimitLayer::new(1024 * 1024)) // 1MB body limit
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
