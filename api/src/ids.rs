use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Opaque, URL-safe identifier for posts and comments.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}
