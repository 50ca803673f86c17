//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/quests` → quest board, quest checks and quest administration
//! - `/learning-contents` → authoring, unlocking and learning content
//! - `/me` → the caller's point balance
//!
//! Everything except `/health` requires a bearer token.

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    health::health_routes, learning_contents::learning_content_routes, me::me_routes,
    quests::quest_routes,
};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod common;
pub mod health;
pub mod learning_contents;
pub mod me;
pub mod quests;

/// Builds the `/api` router with its state applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest(
            "/quests",
            quest_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/learning-contents",
            learning_content_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
        .with_state(app_state)
}
