use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::learning_content::Model as ContentModel;
use util::state::AppState;
use validator::Validate;

use super::common::{ContentRequest, ContentResponse, content_error_response, load_owned};
use crate::{auth::AuthUser, response::ApiResponse, routes::common::validation_failed};

/// PUT /learning-contents/{content_id}
///
/// Replaces every editable field. Only the author may edit.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` for invalid fields, an unknown prerequisite, or a
///   prerequisite that would form a cycle
/// - `403 Forbidden` for anyone but the author
/// - `404 Not Found`
pub async fn edit_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<i64>,
    Json(req): Json<ContentRequest>,
) -> Response {
    if let Err(response) = load_owned(&app_state, user.id(), content_id).await {
        return response;
    }
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }
    let fields = match req.into_fields() {
        Ok(fields) => fields,
        Err(e) => return content_error_response(e),
    };

    match ContentModel::update(app_state.db(), content_id, &fields).await {
        Ok(content) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ContentResponse::for_viewer(content, user.id()),
                "Learning content updated successfully",
            )),
        )
            .into_response(),
        Err(e) => content_error_response(e),
    }
}
