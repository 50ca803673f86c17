use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::learning::{record_learned, submit_answer};
use db::models::learning_content::Model as ContentModel;
use util::state::AppState;
use validator::Validate;

use super::common::{
    AnswerRequest, AnswerResponse, ContentRequest, ContentResponse, LearnResponse,
    award_for_learning, content_error_response,
};
use crate::{auth::AuthUser, response::ApiResponse, routes::common::validation_failed};

/// POST /learning-contents
///
/// Creates a content authored by the caller.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Prompt basics",
///   "body": "...",
///   "question": "What do you give a model?",
///   "answer": "prompt",
///   "difficulty": 1,
///   "prerequisite_id": null,
///   "is_public": true
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` for missing fields, difficulty outside 1-3, or an
///   unknown prerequisite
pub async fn create_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<ContentRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }
    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return content_error_response(e),
    };

    match ContentModel::create(app_state.db(), user.id(), &fields).await {
        Ok(content) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ContentResponse::for_viewer(content, user.id()),
                "Learning content created successfully",
            )),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}

/// POST /learning-contents/{content_id}/learn
///
/// Marks an unlocked content as learned, then awards any tutorial quest and
/// any learning quest targeting it. Learning twice is harmless and pays 0.
pub async fn learn_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<i64>,
) -> Response {
    if let Err(e) = record_learned(app_state.db(), user.id(), content_id).await {
        return content_error_response(e);
    }

    let points = award_for_learning(&app_state, user.id(), content_id).await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LearnResponse { points },
            "Content learned",
        )),
    )
        .into_response()
}

/// POST /learning-contents/{content_id}/answer
///
/// A correct answer behaves like `/learn`. A wrong one writes nothing.
///
/// ### Request Body
/// ```json
/// { "answer": "prompt" }
/// ```
pub async fn answer_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<i64>,
    Json(req): Json<AnswerRequest>,
) -> Response {
    let outcome = match submit_answer(app_state.db(), user.id(), content_id, &req.answer).await {
        Ok(outcome) => outcome,
        Err(e) => return content_error_response(e),
    };

    if !outcome.correct {
        return (
            StatusCode::OK,
            Json(ApiResponse::success(
                AnswerResponse::default(),
                "Incorrect answer",
            )),
        )
            .into_response();
    }

    let points = award_for_learning(&app_state, user.id(), content_id).await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AnswerResponse {
                correct: true,
                points,
            },
            "Correct answer",
        )),
    )
        .into_response()
}
