//! `/quests` route group.
//!
//! - `GET  /quests` → quest board for the caller
//! - `POST /quests/check` → run the quest engine for a user action
//! - `POST /quests` → define a quest (admin)
//! - `PUT  /quests/{quest_id}` → edit a quest (admin)

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use util::state::AppState;

use crate::auth::guards::allow_admin;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn quest_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::get_quests))
        .route("/", post(post::create_quest).route_layer(from_fn(allow_admin)))
        .route("/check", post(post::check_quests))
        .route(
            "/{quest_id}",
            put(put::edit_quest).route_layer(from_fn(allow_admin)),
        )
}
