//! In-memory social posting service: posts, flat comment lists,
//! like/dislike counters and shareable links, served over JSON.

pub mod config;
pub mod dto;
pub mod errors;
pub mod ids;
pub mod models;
pub mod respond;
pub mod routes;
pub mod states;
pub mod store;
pub mod validate;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::Config;
pub use states::AppState;
pub use store::{PostStore, StoreError};

/// Build the router with state and middleware attached.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
