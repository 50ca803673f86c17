//! Quest Engine
//!
//! Decides which quests a user action can clear, records each clear once per
//! user, and credits the summed points to the user's balance.
//!
//! At-most-once awarding rests on the `(user_id, quest_id)` key of
//! `user_cleared_quests`: only the call whose insert actually wrote a row is
//! paid, and the clears plus the balance update share one transaction.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{QuestError, QuestResult};
use crate::events::{QuestTrigger, trigger};
use crate::models::quest::{
    Column as QuestColumn, Entity as QuestEntity, Model as QuestModel, QuestCategory,
};
use crate::models::user::Model as UserModel;
use crate::models::user_cleared_quest::Model as ClearedModel;

/// A quest cleared by an award call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearedQuest {
    pub id: i64,
    pub title: String,
    pub points: i32,
}

/// What a single award call produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AwardOutcome {
    pub points: i64,
    pub cleared: Vec<ClearedQuest>,
}

/// A quest as seen by one user on the quest board.
#[derive(Debug, Clone, Serialize)]
pub struct QuestStatus {
    #[serde(flatten)]
    pub quest: QuestModel,
    pub is_cleared: bool,
    pub cleared_at: Option<DateTime<Utc>>,
}

pub struct QuestEngine {
    db: DatabaseConnection,
}

impl QuestEngine {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Entry point for every user action.
    ///
    /// Parses the raw trigger, matches candidate quests and awards the ones
    /// the user has not cleared yet.
    pub async fn check_and_award(
        &self,
        user_id: i64,
        trigger_event: &str,
        target_id: Option<i64>,
    ) -> QuestResult<AwardOutcome> {
        let trigger = QuestTrigger::parse(trigger_event, target_id)?;
        self.process(user_id, &trigger).await
    }

    pub async fn process(&self, user_id: i64, trigger: &QuestTrigger) -> QuestResult<AwardOutcome> {
        let candidates = self.match_candidates(trigger).await?;
        debug!(
            user_id,
            event = trigger.event_type(),
            target = ?trigger.target_id(),
            candidates = candidates.len(),
            "Matched quest candidates"
        );
        self.award_for_candidates(user_id, &candidates).await
    }

    /// Selects the active quests a trigger can clear.
    pub async fn match_candidates(&self, trigger: &QuestTrigger) -> QuestResult<Vec<i64>> {
        let quests = match trigger {
            QuestTrigger::ContentLearned { content_id } => {
                let mut quests = QuestModel::active_in_category(
                    &self.db,
                    trigger::CONTENT_LEARNED,
                    QuestCategory::Tutorial,
                    None,
                )
                .await?;
                if let Some(content_id) = content_id {
                    quests.extend(
                        QuestModel::active_in_category(
                            &self.db,
                            trigger::CONTENT_LEARNED,
                            QuestCategory::Learning,
                            Some(*content_id),
                        )
                        .await?,
                    );
                }
                quests
            }
            QuestTrigger::Action { event } => QuestModel::active_for_trigger(&self.db, event).await?,
        };

        let mut seen = HashSet::new();
        Ok(quests
            .into_iter()
            .map(|quest| quest.id)
            .filter(|id| seen.insert(*id))
            .collect())
    }

    /// Clears every candidate the user has not cleared before and credits
    /// their points.
    ///
    /// Returns a zero outcome without writing when nothing is new. Any storage
    /// error rolls back both the clears and the balance update.
    pub async fn award_for_candidates(
        &self,
        user_id: i64,
        candidates: &[i64],
    ) -> QuestResult<AwardOutcome> {
        let already_cleared = ClearedModel::cleared_among(&self.db, user_id, candidates).await?;
        let mut seen = HashSet::new();
        let fresh: Vec<i64> = candidates
            .iter()
            .copied()
            .filter(|id| !already_cleared.contains(id) && seen.insert(*id))
            .collect();

        if fresh.is_empty() {
            return Ok(AwardOutcome::default());
        }

        let txn = self.db.begin().await?;

        let quests = QuestEntity::find()
            .filter(QuestColumn::Id.is_in(fresh))
            .order_by_asc(QuestColumn::Id)
            .all(&txn)
            .await?;

        let mut outcome = AwardOutcome::default();
        for quest in quests {
            // A concurrent call may have cleared it since the read above.
            if !ClearedModel::insert_if_absent(&txn, user_id, quest.id).await? {
                debug!(user_id, quest_id = quest.id, "Quest cleared concurrently, skipping");
                continue;
            }
            outcome.points += i64::from(quest.points);
            outcome.cleared.push(ClearedQuest {
                id: quest.id,
                title: quest.title,
                points: quest.points,
            });
        }

        if outcome.points > 0 && !UserModel::add_points(&txn, user_id, outcome.points).await? {
            txn.rollback().await?;
            return Err(QuestError::UserNotFound(user_id));
        }

        txn.commit().await?;

        if !outcome.cleared.is_empty() {
            info!(
                user_id,
                points = outcome.points,
                quests = ?outcome.cleared.iter().map(|q| q.id).collect::<Vec<_>>(),
                "Quests cleared"
            );
        }

        Ok(outcome)
    }

    /// Active quests with the user's clear status, in board order.
    pub async fn board(&self, user_id: i64) -> QuestResult<Vec<QuestStatus>> {
        let quests = QuestModel::all_active(&self.db).await?;
        let clears = ClearedModel::all_for_user(&self.db, user_id).await?;

        Ok(quests
            .into_iter()
            .map(|quest| {
                let cleared_at = clears
                    .iter()
                    .find(|clear| clear.quest_id == quest.id)
                    .map(|clear| clear.cleared_at);
                QuestStatus {
                    quest,
                    is_cleared: cleared_at.is_some(),
                    cleared_at,
                }
            })
            .collect())
    }
}
