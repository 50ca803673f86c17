pub mod learning_content;
pub mod quest;
pub mod user;

/// Username of the fixed admin account; authors the demo content.
pub const ADMIN_USERNAME: &str = "admin";
