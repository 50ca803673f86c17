use crate::seed::Seeder;
use crate::seeds::learning_content::find_by_title;
use db::models::quest::{Column, Entity, Model as QuestModel, NewQuest, QuestCategory};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::fs;

/// One entry of the quest catalogue.
#[derive(Debug, Deserialize)]
struct QuestDefinition {
    title: String,
    #[serde(default)]
    description: Option<String>,
    category: QuestCategory,
    points: i32,
    trigger_event: String,
    /// Title of the learning content a `learning` quest targets.
    #[serde(default)]
    target: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Seeds quest definitions from a JSON catalogue.
pub struct QuestSeeder {
    path: String,
}

impl Default for QuestSeeder {
    fn default() -> Self {
        Self {
            path: "quests.json".into(),
        }
    }
}

#[async_trait::async_trait]
impl Seeder for QuestSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let catalogue = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                eprintln!("Warning: {} not found, no quests seeded", self.path);
                return Ok(());
            }
        };
        let definitions: Vec<QuestDefinition> = serde_json::from_str(&catalogue)
            .map_err(|e| DbErr::Custom(format!("invalid {}: {e}", self.path)))?;

        for definition in definitions {
            let exists = Entity::find()
                .filter(Column::Title.eq(definition.title.as_str()))
                .one(db)
                .await?
                .is_some();
            if exists {
                continue;
            }

            let target_id = match &definition.target {
                Some(title) => match find_by_title(db, title).await? {
                    Some(content) => Some(content.id),
                    None => {
                        eprintln!("Warning: quest '{}' targets unknown content '{title}'", definition.title);
                        continue;
                    }
                },
                None => None,
            };

            let quest = NewQuest {
                title: definition.title,
                description: definition.description,
                category: definition.category,
                points: definition.points,
                trigger_event: definition.trigger_event,
                target_id,
                is_active: definition.is_active,
            };
            QuestModel::create(db, &quest)
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        Ok(())
    }
}
