use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, PaginatorTrait, QuerySelect};
use serde::Serialize;

/// Record of a user clearing a quest in the `user_cleared_quests` table.
///
/// Keyed on `(user_id, quest_id)` so a quest can be cleared, and its points
/// awarded, only once per user.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_cleared_quests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub quest_id: i64,

    pub cleared_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::quest::Entity",
        from = "Column::QuestId",
        to = "super::quest::Column::Id",
        on_delete = "Cascade"
    )]
    Quest,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts the clear unless one already exists for the pair.
    ///
    /// Returns `true` only for the call whose row was actually written, which
    /// is what decides whether points are due.
    pub async fn insert_if_absent<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quest_id: i64,
    ) -> Result<bool, DbErr> {
        let clear = ActiveModel {
            user_id: Set(user_id),
            quest_id: Set(quest_id),
            cleared_at: Set(Utc::now()),
        };

        let inserted = Entity::insert(clear)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::QuestId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(inserted > 0)
    }

    /// Which of `quest_ids` the user has already cleared.
    pub async fn cleared_among<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        quest_ids: &[i64],
    ) -> Result<HashSet<i64>, DbErr> {
        if quest_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids = Entity::find()
            .select_only()
            .column(Column::QuestId)
            .filter(Column::UserId.eq(user_id))
            .filter(Column::QuestId.is_in(quest_ids.iter().copied()))
            .into_tuple::<i64>()
            .all(db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    pub async fn all_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(db)
            .await
    }

    pub async fn count_for_user<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .count(db)
            .await
    }
}
