pub mod m202507010001_create_users;
pub mod m202507010002_create_learning_contents;
pub mod m202507010003_create_user_learned_contents;
pub mod m202507020001_create_quests;
pub mod m202507020002_create_user_cleared_quests;
