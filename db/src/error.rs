//! Typed errors for the learning and quest subsystems.
//!
//! Storage errors are wrapped unchanged so callers can tell an internal
//! failure apart from a rejected request.

use sea_orm::DbErr;

pub type QuestResult<T> = Result<T, QuestError>;
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while matching or awarding quests.
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("trigger_event is required")]
    MissingTrigger,

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Quest {0} not found")]
    QuestNotFound(i64),

    #[error("Invalid quest definition: {0}")]
    InvalidQuest(String),
}

/// Errors raised while creating, editing or learning content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Learning content {0} not found")]
    NotFound(i64),

    #[error("Difficulty must be between 1 and 3, got {0}")]
    InvalidDifficulty(i32),

    #[error("Prerequisite content {0} does not exist")]
    PrerequisiteNotFound(i64),

    #[error("Using {prerequisite_id} as prerequisite of {content_id} would create a cycle")]
    PrerequisiteCycle { content_id: i64, prerequisite_id: i64 },

    #[error("Learning content {0} is locked")]
    Locked(i64),
}
