//! Learning flow: answering a content and recording it as learned.

use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::error::{ContentError, ContentResult};
use crate::models::learning_content::Model as ContentModel;
use crate::models::user_learned_content::Model as LearnedModel;
use crate::unlock::is_unlocked;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// `true` only the first time the user learns this content.
    pub newly_learned: bool,
}

/// Loads a content the user is allowed to study.
pub async fn unlocked_content<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    content_id: i64,
) -> ContentResult<ContentModel> {
    let content = ContentModel::find_by_id(db, content_id)
        .await?
        .ok_or(ContentError::NotFound(content_id))?;
    if !is_unlocked(db, user_id, &content).await? {
        return Err(ContentError::Locked(content_id));
    }
    Ok(content)
}

/// Marks an unlocked content as learned. Repeating it changes nothing and
/// returns `false`.
pub async fn record_learned<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    content_id: i64,
) -> ContentResult<bool> {
    unlocked_content(db, user_id, content_id).await?;
    let inserted = LearnedModel::record(db, user_id, content_id).await?;
    debug!(user_id, content_id, inserted, "Recorded learned content");
    Ok(inserted)
}

/// Checks an answer and, when it is correct, records the content as learned.
pub async fn submit_answer<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    content_id: i64,
    answer: &str,
) -> ContentResult<AnswerOutcome> {
    let content = unlocked_content(db, user_id, content_id).await?;
    if !content.accepts_answer(answer) {
        return Ok(AnswerOutcome {
            correct: false,
            newly_learned: false,
        });
    }

    let newly_learned = LearnedModel::record(db, user_id, content_id).await?;
    Ok(AnswerOutcome {
        correct: true,
        newly_learned,
    })
}
