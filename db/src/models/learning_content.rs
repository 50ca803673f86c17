use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// A flashcard-style learning item in the `learning_contents` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "learning_contents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// The only user allowed to edit or delete this item.
    pub author_id: i64,

    pub title: String,
    pub body: String,
    pub question: String,
    pub answer: String,

    /// 1 (beginner), 2 (intermediate) or 3 (advanced).
    pub difficulty: i32,

    /// Direct prerequisite. Only this single edge gates visibility.
    pub prerequisite_id: Option<i64>,
    pub is_public: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Author,

    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::PrerequisiteId",
        to = "Column::Id",
        on_delete = "SetNull"
    )]
    Prerequisite,

    #[sea_orm(has_many = "super::user_learned_content::Entity")]
    LearnedMarks,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::user_learned_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LearnedMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Difficulty levels accepted for learning content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl TryFrom<i32> for Difficulty {
    type Error = ContentError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Difficulty::Beginner),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            other => Err(ContentError::InvalidDifficulty(other)),
        }
    }
}

impl From<Difficulty> for i32 {
    fn from(value: Difficulty) -> Self {
        value as i32
    }
}

/// Editable fields of a learning content, shared by create and update.
#[derive(Clone, Debug)]
pub struct ContentFields {
    pub title: String,
    pub body: String,
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
    pub prerequisite_id: Option<i64>,
    pub is_public: bool,
}

/// Checks a submitted answer against the stored one.
///
/// Single-character answers must match exactly. Longer answers only need to
/// appear somewhere in the submission. Surrounding whitespace in the
/// submission is ignored.
pub fn answer_matches(correct: &str, submitted: &str) -> bool {
    let submitted = submitted.trim();
    if submitted.is_empty() {
        return false;
    }
    if correct.chars().count() == 1 {
        submitted == correct
    } else {
        submitted.contains(correct)
    }
}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        author_id: i64,
        fields: &ContentFields,
    ) -> ContentResult<Model> {
        if let Some(prerequisite_id) = fields.prerequisite_id {
            ensure_exists(db, prerequisite_id).await?;
        }

        let now = Utc::now();
        let content = ActiveModel {
            author_id: Set(author_id),
            title: Set(fields.title.clone()),
            body: Set(fields.body.clone()),
            question: Set(fields.question.clone()),
            answer: Set(fields.answer.clone()),
            difficulty: Set(fields.difficulty.into()),
            prerequisite_id: Set(fields.prerequisite_id),
            is_public: Set(fields.is_public),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(content.insert(db).await?)
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Replaces every editable field of an existing content.
    ///
    /// The new prerequisite must exist and must not lead back to `id`.
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: &ContentFields,
    ) -> ContentResult<Model> {
        if Self::find_by_id(db, id).await?.is_none() {
            return Err(ContentError::NotFound(id));
        }
        if let Some(prerequisite_id) = fields.prerequisite_id {
            ensure_acyclic(db, id, prerequisite_id).await?;
        }

        let content = ActiveModel {
            id: Set(id),
            title: Set(fields.title.clone()),
            body: Set(fields.body.clone()),
            question: Set(fields.question.clone()),
            answer: Set(fields.answer.clone()),
            difficulty: Set(fields.difficulty.into()),
            prerequisite_id: Set(fields.prerequisite_id),
            is_public: Set(fields.is_public),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(content.update(db).await?)
    }

    /// Deletes a content. Its learned marks cascade; dependants lose their
    /// prerequisite.
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> ContentResult<()> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::NotFound(id));
        }
        Ok(())
    }

    pub fn accepts_answer(&self, submitted: &str) -> bool {
        answer_matches(&self.answer, submitted)
    }
}

async fn ensure_exists<C: ConnectionTrait>(db: &C, id: i64) -> ContentResult<Model> {
    Model::find_by_id(db, id)
        .await?
        .ok_or(ContentError::PrerequisiteNotFound(id))
}

/// Walks the prerequisite chain starting at `prerequisite_id` and fails if it
/// reaches `content_id`.
async fn ensure_acyclic<C: ConnectionTrait>(
    db: &C,
    content_id: i64,
    prerequisite_id: i64,
) -> ContentResult<()> {
    let cycle = ContentError::PrerequisiteCycle {
        content_id,
        prerequisite_id,
    };
    if prerequisite_id == content_id {
        return Err(cycle);
    }

    let mut seen = HashSet::new();
    let mut current = ensure_exists(db, prerequisite_id).await?;
    while let Some(next_id) = current.prerequisite_id {
        if next_id == content_id {
            return Err(cycle);
        }
        // An existing loop that does not pass through `content_id`.
        if !seen.insert(next_id) {
            break;
        }
        current = match Model::find_by_id(db, next_id).await? {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}
