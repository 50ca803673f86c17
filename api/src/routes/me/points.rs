use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Model as UserModel;
use serde::Serialize;
use util::state::AppState;

use crate::{auth::AuthUser, response::ApiResponse, routes::common::error_response};

#[derive(Debug, Serialize, Default)]
pub struct PointsResponse {
    pub total_points: i64,
}

/// GET /me/points
///
/// The caller's point balance.
pub async fn get_my_points(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Response {
    match UserModel::find_by_id(app_state.db(), user.id()).await {
        Ok(Some(found)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                PointsResponse {
                    total_points: found.total_points,
                },
                "Points retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            tracing::error!(error = %e, user_id = user.id(), "Failed to load point balance");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
