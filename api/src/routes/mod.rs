mod health;
mod post;

use axum::{
    Router,
    routing::{get, post},
};

use crate::states::AppState;

pub use health::health_check;
pub use post::{add_comment, create_post, dislike_post, get_post, like_post, share_post};

/// Unknown paths fall through to axum's 404, wrong verbs to its 405.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/posts", post(create_post))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", post(add_comment))
        .route("/posts/{id}/like", post(like_post))
        .route("/posts/{id}/dislike", post(dislike_post))
        .route("/posts/{id}/share", get(share_post))
}
