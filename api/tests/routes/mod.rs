mod health_test;
mod learning_contents;
mod quests;
