//! Prerequisite gating for learning content.
//!
//! A public content is available to a user when it has no prerequisite or
//! when the user has learned its direct prerequisite. Only that one edge is
//! checked; the rest of the chain is never walked. Private content is never
//! offered here.

use std::collections::HashSet;

use sea_orm::{ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::models::learning_content::{Column, Entity, Model as ContentModel};
use crate::models::user_learned_content::Model as LearnedModel;

#[derive(Debug, Clone, Serialize)]
pub struct AvailableContent {
    #[serde(flatten)]
    pub content: ContentModel,
    pub is_learned: bool,
}

/// Every content the user may currently study, easiest first, then oldest,
/// then by id.
pub async fn resolve_available_content<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
) -> Result<Vec<AvailableContent>, DbErr> {
    let learned: HashSet<i64> = LearnedModel::learned_ids(db, user_id)
        .await?
        .into_iter()
        .collect();

    let mut gate = Condition::any().add(Column::PrerequisiteId.is_null());
    if !learned.is_empty() {
        gate = gate.add(Column::PrerequisiteId.is_in(learned.iter().copied()));
    }

    let contents = Entity::find()
        .filter(Column::IsPublic.eq(true))
        .filter(gate)
        .order_by_asc(Column::Difficulty)
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;

    Ok(contents
        .into_iter()
        .map(|content| AvailableContent {
            is_learned: learned.contains(&content.id),
            content,
        })
        .collect())
}

/// Whether `content` would appear in the user's available list.
pub async fn is_unlocked<C: ConnectionTrait>(
    db: &C,
    user_id: i64,
    content: &ContentModel,
) -> Result<bool, DbErr> {
    if !content.is_public {
        return Ok(false);
    }
    match content.prerequisite_id {
        None => Ok(true),
        Some(prerequisite_id) => LearnedModel::is_learned(db, user_id, prerequisite_id).await,
    }
}
