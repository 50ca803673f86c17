use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    learning_content::LearningContentSeeder, quest::QuestSeeder, user::UserSeeder,
};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(LearningContentSeeder), "LearningContent"),
        (Box::new(QuestSeeder::default()), "Quest"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
