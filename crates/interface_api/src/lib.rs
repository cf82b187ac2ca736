//! HTTP API Layer
//!
//! This crate provides the REST API for the campaign system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `GET /campaigns` plus liveness and readiness probes
//! - **Middleware**: request logging
//! - **DTOs**: response shapes
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let adapter = Arc::new(PostgresCampaignAdapter::new(pool));
//! let app = create_router(AppState::new(adapter));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use core_kernel::HealthCheckable;
use domain_campaign::{CampaignPort, CampaignService};

use crate::middleware::request_logging_middleware;
use crate::handlers::{campaign, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub campaigns: CampaignService,
    pub health: Arc<dyn HealthCheckable>,
}

impl AppState {
    /// Builds the state from an adapter that serves both campaigns and health
    pub fn new<A>(adapter: Arc<A>) -> Self
    where
        A: CampaignPort + HealthCheckable + 'static,
    {
        Self {
            campaigns: CampaignService::new(adapter.clone()),
            health: adapter,
        }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let campaign_routes = Router::new()
        .route("/campaigns", get(campaign::list_campaigns))
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .merge(campaign_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
