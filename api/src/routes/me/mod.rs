use axum::{Router, routing::get};
use util::state::AppState;

pub mod points;

use points::get_my_points;

/// `/me` routes, scoped to the caller.
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/points", get(get_my_points))
}
