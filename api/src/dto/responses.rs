use serde::Serialize;

/// Body of `GET /posts/{id}/share`.
#[derive(Debug, Serialize)]
pub struct ShareLinkResponse {
    pub shareable_link: String,
}
