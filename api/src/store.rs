use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::{
    dto::{CreateCommentRequest, CreatePostRequest},
    ids,
    models::{Comment, Post},
    validate::{self, ValidationError},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("post {0} not found")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory owner of every post and its comments.
///
/// A single read-write lock guards the whole map. Writers (`create`,
/// `add_comment`, `like`, `dislike`) take it exclusively, readers (`get`,
/// `share_link`) share it. The lock is only held across the map touch and
/// callers receive clones, so no one observes a half-applied update.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<HashMap<String, Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, input: CreatePostRequest) -> StoreResult<Post> {
        validate::check(&input)?;

        let post = Post {
            id: ids::new_id(),
            content: input.content,
            comments: Vec::new(),
            likes: 0,
            dislikes: 0,
            created_at: ids::now(),
        };

        self.posts.write().insert(post.id.clone(), post.clone());

        info!(post_id = %post.id, "post created");
        Ok(post)
    }

    pub fn get(&self, id: &str) -> StoreResult<Post> {
        self.posts
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.posts.read().contains_key(id)
    }

    /// Appends a comment. A missing post is reported before invalid content.
    pub fn add_comment(&self, post_id: &str, input: CreateCommentRequest) -> StoreResult<Comment> {
        let checked = validate::check(&input);
        let comment = Comment {
            id: ids::new_id(),
            content: input.content,
            created_at: ids::now(),
        };

        {
            let mut posts = self.posts.write();
            let post = posts
                .get_mut(post_id)
                .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;
            checked?;
            post.comments.push(comment.clone());
        }

        info!(post_id, comment_id = %comment.id, "comment added");
        Ok(comment)
    }

    pub fn like(&self, post_id: &str) -> StoreResult<Post> {
        let post = self.update(post_id, |post| post.likes += 1)?;
        info!(post_id, likes = post.likes, "post liked");
        Ok(post)
    }

    pub fn dislike(&self, post_id: &str) -> StoreResult<Post> {
        let post = self.update(post_id, |post| post.dislikes += 1)?;
        info!(post_id, dislikes = post.dislikes, "post disliked");
        Ok(post)
    }

    /// `base` is used verbatim as the prefix; ids need no escaping.
    pub fn share_link(&self, post_id: &str, base: &str) -> StoreResult<String> {
        if !self.contains(post_id) {
            return Err(StoreError::NotFound(post_id.to_string()));
        }
        Ok(format!("{base}{post_id}"))
    }

    pub fn len(&self) -> usize {
        self.posts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update(&self, post_id: &str, apply: impl FnOnce(&mut Post)) -> StoreResult<Post> {
        let mut posts = self.posts.write();
        let post = posts
            .get_mut(post_id)
            .ok_or_else(|| StoreError::NotFound(post_id.to_string()))?;
        apply(post);
        Ok(post.clone())
    }
}
