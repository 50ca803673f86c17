use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, QuerySelect};
use serde::Serialize;

/// A "user has learned this content" fact. Append-only, one per pair.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_learned_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub content_id: i64,

    pub created_at: DateTime<Utc>,
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
        belongs_to = "super::learning_content::Entity",
        from = "Column::ContentId",
        to = "super::learning_content::Column::Id",
        on_delete = "Cascade"
    )]
    Content,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::learning_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Content.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Marks `content_id` as learned by `user_id`.
    ///
    /// A second call for the same pair is absorbed by the primary key and
    /// returns `false`.
    pub async fn record<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        content_id: i64,
    ) -> Result<bool, DbErr> {
        let mark = ActiveModel {
            user_id: Set(user_id),
            content_id: Set(content_id),
            created_at: Set(Utc::now()),
        };

        let inserted = Entity::insert(mark)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::ContentId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(inserted > 0)
    }

    /// Ids of every content the user has learned.
    pub async fn learned_ids<C: ConnectionTrait>(db: &C, user_id: i64) -> Result<Vec<i64>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::ContentId)
            .filter(Column::UserId.eq(user_id))
            .into_tuple::<i64>()
            .all(db)
            .await
    }

    pub async fn is_learned<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        content_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id((user_id, content_id))
            .one(db)
            .await?
            .is_some())
    }
}
