//! `/learning-contents` route group.
//!
//! - `GET    /learning-contents` → contents the caller can study
//! - `POST   /learning-contents` → author a content
//! - `GET    /learning-contents/{content_id}` → detail
//! - `PUT    /learning-contents/{content_id}` → edit (author only)
//! - `DELETE /learning-contents/{content_id}` → delete (author only)
//! - `POST   /learning-contents/{content_id}/learn` → mark learned, award quests
//! - `POST   /learning-contents/{content_id}/answer` → check an answer

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn learning_content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_available).post(post::create_content))
        .route(
            "/{content_id}",
            get(get::get_content)
                .put(put::edit_content)
                .delete(delete::delete_content),
        )
        .route("/{content_id}/learn", post(post::learn_content))
        .route("/{content_id}/answer", post(post::answer_content))
}
