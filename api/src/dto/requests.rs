use serde::Deserialize;
use validator::Validate;

/// Body of `POST /posts`. Any client-supplied `id` is ignored.
#[derive(Debug, Validate, Deserialize)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 500))]
    pub content: String,
}

/// Body of `POST /posts/{id}/comments`.
#[derive(Debug, Validate, Deserialize)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 300))]
    pub content: String,
}
