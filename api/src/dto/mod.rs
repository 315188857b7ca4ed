mod requests;
mod responses;

pub use requests::{CreateCommentRequest, CreatePostRequest};
pub use responses::ShareLinkResponse;
