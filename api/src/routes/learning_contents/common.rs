use axum::{http::StatusCode, response::Response};
use chrono::{DateTime, Utc};
use db::error::ContentError;
use db::events::QuestTrigger;
use db::models::learning_content::{ContentFields, Difficulty, Model as ContentModel};
use db::quest_engine::QuestEngine;
use db::unlock::AvailableContent;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

use crate::routes::common::error_response;

#[derive(Debug, Deserialize, Validate)]
pub struct ContentRequest {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    #[validate(range(min = 1, max = 3, message = "difficulty must be between 1 and 3"))]
    pub difficulty: i32,
    pub prerequisite_id: Option<i64>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_public() -> bool {
    true
}

impl ContentRequest {
    pub fn into_fields(self) -> Result<ContentFields, ContentError> {
        Ok(ContentFields {
            difficulty: Difficulty::try_from(self.difficulty)?,
            title: self.title,
            body: self.body,
            question: self.question,
            answer: self.answer,
            prerequisite_id: self.prerequisite_id,
            is_public: self.is_public,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub answer: String,
}

/// A content as returned to clients. `answer` is only filled in for the
/// author.
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub difficulty: i32,
    pub prerequisite_id: Option<i64>,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_learned: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentResponse {
    pub fn for_viewer(content: ContentModel, viewer_id: i64) -> Self {
        let answer = (content.author_id == viewer_id).then(|| content.answer.clone());
        Self {
            answer,
            ..Self::hidden(content)
        }
    }

    fn hidden(content: ContentModel) -> Self {
        Self {
            id: content.id,
            author_id: content.author_id,
            title: content.title,
            body: content.body,
            question: content.question,
            answer: None,
            difficulty: content.difficulty,
            prerequisite_id: content.prerequisite_id,
            is_public: content.is_public,
            is_learned: None,
            created_at: content.created_at,
            updated_at: content.updated_at,
        }
    }
}

impl From<AvailableContent> for ContentResponse {
    fn from(available: AvailableContent) -> Self {
        Self {
            is_learned: Some(available.is_learned),
            ..Self::hidden(available.content)
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct LearnResponse {
    pub points: i64,
}

#[derive(Debug, Serialize, Default)]
pub struct AnswerResponse {
    pub correct: bool,
    pub points: i64,
}

/// Runs the quest engine after a content was learned.
///
/// The learning itself already succeeded, so a failure here is logged and
/// reported as zero points.
pub async fn award_for_learning(app_state: &AppState, user_id: i64, content_id: i64) -> i64 {
    let engine = QuestEngine::new(app_state.db_clone());
    match engine
        .process(user_id, &QuestTrigger::content_learned(content_id))
        .await
    {
        Ok(outcome) => outcome.points,
        Err(e) => {
            tracing::warn!(error = %e, user_id, content_id, "Quest check after learning failed");
            0
        }
    }
}

/// Maps content errors to HTTP responses.
pub fn content_error_response(err: ContentError) -> Response {
    match err {
        ContentError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
        ContentError::InvalidDifficulty(_)
        | ContentError::PrerequisiteNotFound(_)
        | ContentError::PrerequisiteCycle { .. } => {
            error_response(StatusCode::BAD_REQUEST, err.to_string())
        }
        ContentError::Locked(_) => error_response(StatusCode::FORBIDDEN, err.to_string()),
        ContentError::Database(e) => {
            tracing::error!(error = %e, "Learning content storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// Loads a content and checks the caller wrote it.
pub async fn load_owned(
    app_state: &AppState,
    user_id: i64,
    content_id: i64,
) -> Result<ContentModel, Response> {
    let content = ContentModel::find_by_id(app_state.db(), content_id)
        .await
        .map_err(|e| content_error_response(e.into()))?
        .ok_or_else(|| content_error_response(ContentError::NotFound(content_id)))?;

    if content.author_id != user_id {
        return Err(error_response(
            StatusCode::FORBIDDEN,
            "Only the author can modify this content",
        ));
    }
    Ok(content)
}
