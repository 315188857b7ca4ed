mod post;

pub use post::{Comment, Post};
