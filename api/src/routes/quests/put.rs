use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quest::{Model as QuestModel, QuestChanges};
use util::state::AppState;
use validator::Validate;

use super::common::{UpdateQuestRequest, quest_error_response};
use crate::{response::ApiResponse, routes::common::validation_failed};

/// PUT /quests/{quest_id} (admin)
///
/// Edits title, description, points or the active flag. Omitted fields are
/// left unchanged.
///
/// ### Responses
/// - `200 OK` with the updated quest
/// - `400 Bad Request` on validation failure
/// - `404 Not Found` if the quest does not exist
pub async fn edit_quest(
    State(app_state): State<AppState>,
    Path(quest_id): Path<i64>,
    Json(req): Json<UpdateQuestRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }

    let changes = QuestChanges {
        title: req.title,
        description: req.description.map(Some),
        points: req.points,
        is_active: req.is_active,
    };

    match QuestModel::update(app_state.db(), quest_id, changes).await {
        Ok(quest) => (
            StatusCode::OK,
            Json(ApiResponse::success(quest, "Quest updated successfully")),
        )
            .into_response(),
        Err(e) => quest_error_response(e),
    }
}
