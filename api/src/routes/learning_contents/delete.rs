use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::learning_content::Model as ContentModel;
use util::state::AppState;

use super::common::{content_error_response, load_owned};
use crate::{auth::AuthUser, response::ApiResponse};

/// DELETE /learning-contents/{content_id}
///
/// Author only. Contents that used this one as prerequisite become
/// unconditionally available.
pub async fn delete_content(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<i64>,
) -> Response {
    if let Err(response) = load_owned(&app_state, user.id(), content_id).await {
        return response;
    }

    match ContentModel::delete(app_state.db(), content_id).await {
        Ok(()) => {
            tracing::info!(content_id, user_id = user.id(), "Learning content deleted");
            (
                StatusCode::OK,
                Json(ApiResponse::<()>::success(
                    (),
                    "Learning content deleted successfully",
                )),
            )
                .into_response()
        }
        Err(e) => content_error_response(e),
    }
}
