use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{QuestError, QuestResult};

/// A quest definition in the `quests` table. Maintained by administrators;
/// the award engine only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "quests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: Option<String>,
    pub category: QuestCategory,

    /// Never negative.
    pub points: i32,

    /// Tag of the user action that can clear this quest, e.g. `report_posted`.
    pub trigger_event: String,

    /// Specific learning content for `learning` quests; unused otherwise.
    pub target_id: Option<i64>,
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
}

/// Quest categories, backed by the `quest_category_type` enum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Display, EnumString,
    Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "quest_category_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum QuestCategory {
    #[sea_orm(string_value = "tutorial")]
    Tutorial,

    #[sea_orm(string_value = "daily")]
    Daily,

    #[sea_orm(string_value = "weekly")]
    Weekly,

    #[sea_orm(string_value = "learning")]
    Learning,
}

impl QuestCategory {
    /// Display order on the quest board.
    pub fn rank(self) -> u8 {
        match self {
            QuestCategory::Tutorial => 0,
            QuestCategory::Daily => 1,
            QuestCategory::Weekly => 2,
            QuestCategory::Learning => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::learning_content::Entity",
        from = "Column::TargetId",
        to = "super::learning_content::Column::Id",
        on_delete = "SetNull"
    )]
    Target,

    #[sea_orm(has_many = "super::user_cleared_quest::Entity")]
    Clears,
}

impl Related<super::learning_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Target.def()
    }
}

impl Related<super::user_cleared_quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clears.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when an administrator defines a quest.
#[derive(Clone, Debug)]
pub struct NewQuest {
    pub title: String,
    pub description: Option<String>,
    pub category: QuestCategory,
    pub points: i32,
    pub trigger_event: String,
    pub target_id: Option<i64>,
    pub is_active: bool,
}

/// Partial edit of a quest; `None` leaves the column untouched.
#[derive(Clone, Debug, Default)]
pub struct QuestChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub points: Option<i32>,
    pub is_active: Option<bool>,
}

impl Model {
    /// Validates and inserts a quest definition.
    ///
    /// `learning` quests must carry a target naming an existing learning
    /// content; no other category may carry one.
    pub async fn create<C: ConnectionTrait>(db: &C, quest: &NewQuest) -> QuestResult<Model> {
        if quest.title.trim().is_empty() {
            return Err(QuestError::InvalidQuest("title is required".into()));
        }
        if quest.trigger_event.trim().is_empty() {
            return Err(QuestError::InvalidQuest("trigger_event is required".into()));
        }
        if quest.points < 0 {
            return Err(QuestError::InvalidQuest("points must not be negative".into()));
        }
        match (quest.category, quest.target_id) {
            (QuestCategory::Learning, Some(target_id)) => {
                if super::learning_content::Model::find_by_id(db, target_id)
                    .await?
                    .is_none()
                {
                    return Err(QuestError::InvalidQuest(format!(
                        "target {target_id} is not a learning content"
                    )));
                }
            }
            (QuestCategory::Learning, None) => {
                return Err(QuestError::InvalidQuest(
                    "learning quests need a target content".into(),
                ));
            }
            (_, None) => {}
            (_, Some(_)) => {
                return Err(QuestError::InvalidQuest(
                    "only learning quests may have a target".into(),
                ));
            }
        }

        let active = ActiveModel {
            title: Set(quest.title.trim().to_owned()),
            description: Set(quest.description.clone()),
            category: Set(quest.category),
            points: Set(quest.points),
            trigger_event: Set(quest.trigger_event.trim().to_owned()),
            target_id: Set(quest.target_id),
            is_active: Set(quest.is_active),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(active.insert(db).await?)
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        changes: QuestChanges,
    ) -> QuestResult<Model> {
        let existing = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(QuestError::QuestNotFound(id))?;

        let mut active: ActiveModel = existing.into();
        if let Some(title) = changes.title {
            if title.trim().is_empty() {
                return Err(QuestError::InvalidQuest("title is required".into()));
            }
            active.title = Set(title.trim().to_owned());
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(points) = changes.points {
            if points < 0 {
                return Err(QuestError::InvalidQuest("points must not be negative".into()));
            }
            active.points = Set(points);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        Ok(active.update(db).await?)
    }

    /// Active quests of any category listening for `trigger_event`.
    pub async fn active_for_trigger<C: ConnectionTrait>(
        db: &C,
        trigger_event: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TriggerEvent.eq(trigger_event))
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Active quests of one category listening for `trigger_event`,
    /// optionally narrowed to a target.
    pub async fn active_in_category<C: ConnectionTrait>(
        db: &C,
        trigger_event: &str,
        category: QuestCategory,
        target_id: Option<i64>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find()
            .filter(Column::TriggerEvent.eq(trigger_event))
            .filter(Column::Category.eq(category))
            .filter(Column::IsActive.eq(true));
        if let Some(target_id) = target_id {
            query = query.filter(Column::TargetId.eq(target_id));
        }

        query.order_by_asc(Column::Id).all(db).await
    }

    /// Every active quest, in board order.
    pub async fn all_active<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        let mut quests = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .all(db)
            .await?;
        quests.sort_by_key(|q| (q.category.rank(), q.id));
        Ok(quests)
    }
}
