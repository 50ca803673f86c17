use crate::seed::Seeder;
use crate::seeds::ADMIN_USERNAME;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        if Model::find_by_username(db, ADMIN_USERNAME).await?.is_some() {
            return Ok(());
        }

        // Fixed admin and learner
        Model::create(db, ADMIN_USERNAME, "admin@example.com", true).await?;
        Model::create(db, "learner", "learner@example.com", false).await?;

        // Random learners
        for _ in 0..10 {
            let username = format!("u{:08}", fastrand::u32(..100_000_000));
            let email: String = SafeEmail().fake();
            // Random collisions on the unique columns are skipped.
            let _ = Model::create(db, &username, &email, false).await;
        }
        Ok(())
    }
}
