use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::error::ContentError;
use db::models::learning_content::Model as ContentModel;
use db::unlock::{is_unlocked, resolve_available_content};
use util::state::AppState;

use super::common::{ContentResponse, content_error_response};
use crate::{auth::AuthUser, response::ApiResponse, routes::common::error_response};

/// GET /learning-contents
///
/// Public contents whose direct prerequisite the caller has learned (or that
/// have none), ordered by difficulty, then creation time. Answers are omitted.
pub async fn list_available(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match resolve_available_content(app_state.db(), user.id()).await {
        Ok(available) => {
            let contents: Vec<ContentResponse> =
                available.into_iter().map(ContentResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    contents,
                    "Learning contents retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => content_error_response(e.into()),
    }
}

/// GET /learning-contents/{content_id}
///
/// ### Responses
/// - `200 OK` for the author, or for anyone when the content is unlocked
/// - `403 Forbidden` for someone else's private or still-locked content
/// - `404 Not Found`
pub async fn get_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<i64>,
) -> Response {
    let db = app_state.db();

    let content = match ContentModel::find_by_id(db, content_id).await {
        Ok(Some(content)) => content,
        Ok(None) => return content_error_response(ContentError::NotFound(content_id)),
        Err(e) => return content_error_response(e.into()),
    };

    if content.author_id != user.id() {
        if !content.is_public {
            return error_response(StatusCode::FORBIDDEN, "This content is private");
        }
        match is_unlocked(db, user.id(), &content).await {
            Ok(true) => {}
            Ok(false) => return content_error_response(ContentError::Locked(content_id)),
            Err(e) => return content_error_response(e.into()),
        }
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            ContentResponse::for_viewer(content, user.id()),
            "Learning content retrieved successfully",
        )),
    )
        .into_response()
}
