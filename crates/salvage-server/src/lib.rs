//! salvage-server
//!
//! HTTP surface over the assessment engine and store. Handlers are thin:
//! validate, compute once, persist, audit.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use salvage_storage::AssessmentStore;

use crate::state::AppState;

/// Build the application router over any assessment store.
pub fn router<S: AssessmentStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/rules", get(routes::rules::get_rules))
        .route("/assessments/compute", post(routes::assessments::compute))
        .route(
            "/assessments/{assessment_id}",
            delete(routes::assessments::delete_assessment::<S>),
        )
        .route(
            "/patients/{patient_id}/assessments",
            get(routes::assessments::list_assessments::<S>)
                .post(routes::assessments::create_assessment::<S>),
        )
        .route(
            "/patients/{patient_id}/assessments/{assessment_id}",
            get(routes::assessments::get_assessment::<S>),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
