use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A top-level content item. Comments are owned by their post and only
/// ever appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub content: String,
    pub comments: Vec<Comment>,
    pub likes: u64,
    pub dislikes: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
