use axum::{http::StatusCode, response::Response};
use db::error::QuestError;
use db::models::quest::QuestCategory;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::error_response;

#[derive(Debug, Deserialize)]
pub struct CheckQuestRequest {
    #[serde(default)]
    pub trigger_event: String,
    pub target_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub description: Option<String>,
    pub category: QuestCategory,
    #[validate(range(min = 0, message = "points must not be negative"))]
    pub points: i32,
    #[validate(length(min = 1, max = 64, message = "trigger_event must be 1-64 characters"))]
    pub trigger_event: String,
    pub target_id: Option<i64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateQuestRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "points must not be negative"))]
    pub points: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Default)]
pub struct ClearedQuestResponse {
    pub id: i64,
    pub title: String,
    pub points: i32,
}

#[derive(Debug, Serialize, Default)]
pub struct CheckQuestResponse {
    pub points: i64,
    pub cleared: Vec<ClearedQuestResponse>,
}

impl From<db::quest_engine::AwardOutcome> for CheckQuestResponse {
    fn from(outcome: db::quest_engine::AwardOutcome) -> Self {
        Self {
            points: outcome.points,
            cleared: outcome
                .cleared
                .into_iter()
                .map(|q| ClearedQuestResponse {
                    id: q.id,
                    title: q.title,
                    points: q.points,
                })
                .collect(),
        }
    }
}

/// Maps quest engine errors to HTTP responses.
pub fn quest_error_response(err: QuestError) -> Response {
    match err {
        QuestError::MissingTrigger | QuestError::InvalidQuest(_) => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        QuestError::UserNotFound(_) | QuestError::QuestNotFound(_) => {
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        QuestError::Database(e) => {
            tracing::error!(error = %e, "Quest storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}
