use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};
use serde::Serialize;

/// Represents a user in the `users` table.
///
/// Authentication lives elsewhere; this row only carries what the quest
/// engine needs, most importantly the running point balance.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Whether the user may manage quest definitions.
    pub admin: bool,
    /// Points earned from cleared quests. Only ever incremented.
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        username: &str,
        email: &str,
        admin: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            admin: Set(admin),
            total_points: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_by_username<C: ConnectionTrait>(
        db: &C,
        username: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Username.eq(username))
            .one(db)
            .await
    }

    /// Adds `points` to the user's balance as a single `UPDATE ... SET
    /// total_points = total_points + ?` statement.
    ///
    /// Returns `false` when no user row matched.
    pub async fn add_points<C: ConnectionTrait>(
        db: &C,
        user_id: i64,
        points: i64,
    ) -> Result<bool, DbErr> {
        let result = Entity::update_many()
            .col_expr(
                Column::TotalPoints,
                Expr::col(Column::TotalPoints).add(points),
            )
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(user_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
