use crate::seed::Seeder;
use crate::seeds::ADMIN_USERNAME;
use db::models::learning_content::{Column, ContentFields, Difficulty, Entity, Model};
use db::models::user::Model as UserModel;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct LearningContentSeeder;

struct Demo {
    title: &'static str,
    body: &'static str,
    question: &'static str,
    answer: &'static str,
    difficulty: Difficulty,
    /// Title of the demo content that must be learned first.
    after: Option<&'static str>,
    is_public: bool,
}

const DEMOS: &[Demo] = &[
    Demo {
        title: "What is a prompt?",
        body: "A prompt is the instruction or context you give a language model.",
        question: "What do we call the input given to a language model?",
        answer: "prompt",
        difficulty: Difficulty::Beginner,
        after: None,
        is_public: true,
    },
    Demo {
        title: "Structuring a prompt",
        body: "Good prompts state a role, a task, constraints and an output format.",
        question: "Which part of a prompt fixes the shape of the reply?",
        answer: "format",
        difficulty: Difficulty::Intermediate,
        after: Some("What is a prompt?"),
        is_public: true,
    },
    Demo {
        title: "Few-shot prompting",
        body: "Showing the model a handful of worked examples steers its answers.",
        question: "How many examples does one-shot prompting use? (digit)",
        answer: "1",
        difficulty: Difficulty::Advanced,
        after: Some("Structuring a prompt"),
        is_public: true,
    },
    Demo {
        title: "Hallucinations",
        body: "Models can produce fluent but false statements; always verify facts.",
        question: "What is a confident but false model answer called?",
        answer: "hallucination",
        difficulty: Difficulty::Beginner,
        after: None,
        is_public: true,
    },
    Demo {
        title: "Draft: evaluation metrics",
        body: "Work in progress.",
        question: "TBD",
        answer: "TBD",
        difficulty: Difficulty::Advanced,
        after: None,
        is_public: false,
    },
];

pub async fn find_by_title(db: &DatabaseConnection, title: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Title.eq(title)).one(db).await
}

#[async_trait::async_trait]
impl Seeder for LearningContentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let author = UserModel::find_by_username(db, ADMIN_USERNAME)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {ADMIN_USERNAME}")))?;

        // Demos are ordered so every prerequisite is created first.
        for demo in DEMOS {
            if find_by_title(db, demo.title).await?.is_some() {
                continue;
            }
            let prerequisite_id = match demo.after {
                Some(title) => find_by_title(db, title).await?.map(|c| c.id),
                None => None,
            };

            let fields = ContentFields {
                title: demo.title.into(),
                body: demo.body.into(),
                question: demo.question.into(),
                answer: demo.answer.into(),
                difficulty: demo.difficulty,
                prerequisite_id,
                is_public: demo.is_public,
            };
            Model::create(db, author.id, &fields)
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        Ok(())
    }
}
