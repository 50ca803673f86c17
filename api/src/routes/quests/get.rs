use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::quest_engine::QuestEngine;
use util::state::AppState;

use super::common::quest_error_response;
use crate::{auth::AuthUser, response::ApiResponse};

/// GET /quests
///
/// Active quests ordered tutorial, daily, weekly, learning, then by id. Each
/// entry carries `is_cleared` and `cleared_at` for the caller.
pub async fn get_quests(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    let engine = QuestEngine::new(app_state.db_clone());

    match engine.board(user.id()).await {
        Ok(board) => (
            StatusCode::OK,
            Json(ApiResponse::success(board, "Quests retrieved successfully")),
        )
            .into_response(),
        Err(e) => quest_error_response(e),
    }
}
