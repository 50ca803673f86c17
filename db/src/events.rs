//! Quest triggers.
//!
//! Business flows (posting, liking, learning, profile edits) describe what the
//! user just did as a `QuestTrigger`. The quest engine dispatches on the
//! variant to decide which quest definitions are candidates.

use crate::error::{QuestError, QuestResult};

/// Trigger tags emitted by the application. Administrators may configure
/// quests for any other tag as well.
pub mod trigger {
    pub const CONTENT_LEARNED: &str = "content_learned";
    pub const REPORT_POSTED: &str = "report_posted";
    pub const REPORT_LIKED: &str = "report_liked";
    pub const PROFILE_UPDATED: &str = "profile_updated";
    pub const TREND_READ: &str = "trend_read";

    pub const KNOWN: [&str; 5] = [
        CONTENT_LEARNED,
        REPORT_POSTED,
        REPORT_LIKED,
        PROFILE_UPDATED,
        TREND_READ,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestTrigger {
    /// A learning content was answered correctly.
    ///
    /// Clears tutorial quests regardless of which content it was, and
    /// learning quests whose target is exactly `content_id`.
    ContentLearned { content_id: Option<i64> },

    /// Any other action, matched on the tag alone.
    Action { event: String },
}

impl QuestTrigger {
    /// Builds a trigger from the raw tag and optional target sent by a client.
    ///
    /// The target is only kept for `content_learned`.
    pub fn parse(event: &str, target_id: Option<i64>) -> QuestResult<Self> {
        let event = event.trim();
        if event.is_empty() {
            return Err(QuestError::MissingTrigger);
        }

        Ok(match event {
            trigger::CONTENT_LEARNED => QuestTrigger::ContentLearned {
                content_id: target_id,
            },
            other => QuestTrigger::Action {
                event: other.to_owned(),
            },
        })
    }

    pub fn content_learned(content_id: i64) -> Self {
        QuestTrigger::ContentLearned {
            content_id: Some(content_id),
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            QuestTrigger::ContentLearned { .. } => trigger::CONTENT_LEARNED,
            QuestTrigger::Action { event } => event,
        }
    }

    pub fn target_id(&self) -> Option<i64> {
        match self {
            QuestTrigger::ContentLearned { content_id } => *content_id,
            QuestTrigger::Action { .. } => None,
        }
    }
}
