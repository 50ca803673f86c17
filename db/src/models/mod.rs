pub mod learning_content;
pub mod quest;
pub mod user;
pub mod user_cleared_quest;
pub mod user_learned_content;

pub use learning_content::Entity as LearningContent;
pub use quest::Entity as Quest;
pub use user::Entity as User;
pub use user_cleared_quest::Entity as UserClearedQuest;
pub use user_learned_content::Entity as UserLearnedContent;
