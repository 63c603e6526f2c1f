//! clinica-api
//!
//! HTTP surface over the calculation engine: list and evaluate calculators,
//! build vitals snapshots from records, and save calculations to a
//! person's log.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use clinica_storage::CalculationStore;

use state::AppState;

/// Build the application router over `state`.
pub fn router<S: CalculationStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/calculators", get(routes::calculators::list_calculators))
        .route(
            "/calculators/{key}",
            get(routes::calculators::get_calculator),
        )
        .route(
            "/calculators/{key}/defaults",
            post(routes::calculators::calculator_defaults),
        )
        .route(
            "/calculators/{key}/evaluate",
            post(routes::calculators::evaluate_calculator),
        )
        .route("/vitals/snapshot", post(routes::vitals::build_snapshot))
        .route(
            "/persons/{person_id}/calculations",
            get(routes::calculations::list_calculations::<S>),
        )
        .route(
            "/persons/{person_id}/calculations/{key}",
            post(routes::calculations::save_calculation::<S>),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
