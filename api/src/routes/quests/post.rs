use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::quest::{Model as QuestModel, NewQuest};
use db::quest_engine::QuestEngine;
use util::state::AppState;
use validator::Validate;

use super::common::{CheckQuestRequest, CheckQuestResponse, CreateQuestRequest, quest_error_response};
use crate::{auth::AuthUser, response::ApiResponse, routes::common::validation_failed};

/// POST /quests/check
///
/// Runs the quest engine for the caller. `target_id` only matters for
/// `content_learned`.
///
/// ### Request Body
/// ```json
/// { "trigger_event": "content_learned", "target_id": 12 }
/// ```
///
/// ### Responses
/// - `200 OK` with `{ "points": 60, "cleared": [{ "id": 1, "title": "...", "points": 10 }] }`
/// - `400 Bad Request` if `trigger_event` is empty
/// - `500 Internal Server Error` on storage failure; nothing is awarded
pub async fn check_quests(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CheckQuestRequest>,
) -> Response {
    let engine = QuestEngine::new(app_state.db_clone());

    match engine
        .check_and_award(user.id(), &req.trigger_event, req.target_id)
        .await
    {
        Ok(outcome) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CheckQuestResponse::from(outcome),
                "Quest check complete",
            )),
        )
            .into_response(),
        Err(e) => quest_error_response(e),
    }
}

/// POST /quests (admin)
///
/// ### Responses
/// - `201 Created` with the quest
/// - `400 Bad Request` on validation failure or a misplaced/unknown target
pub async fn create_quest(
    State(app_state): State<AppState>,
    Json(req): Json<CreateQuestRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }

    let quest = NewQuest {
        title: req.title,
        description: req.description,
        category: req.category,
        points: req.points,
        trigger_event: req.trigger_event,
        target_id: req.target_id,
        is_active: req.is_active,
    };

    match QuestModel::create(app_state.db(), &quest).await {
        Ok(quest) => {
            tracing::info!(quest_id = quest.id, category = %quest.category, "Quest created");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(quest, "Quest created successfully")),
            )
                .into_response()
        }
        Err(e) => quest_error_response(e),
    }
}
