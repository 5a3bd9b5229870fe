//! HTTP surface for the tracker service.
//!
//! One shared store behind a single `RwLock`: mutations take the write
//! lock for the full read-modify-write sequence, reads and searches take
//! the read lock. No handler holds a lock across external I/O.

mod error;
mod handlers;

pub use error::ApiError;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracker_lib::IssueStore;

/// Shared service state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<IssueStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: IssueStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub(crate) fn store(&self) -> &RwLock<IssueStore> {
        &self.store
    }
}

/// Build the service router.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_health))
        .route("/health", get(handlers::health))
        .route(
            "/issues",
            get(handlers::list_issues).post(handlers::create_issue),
        )
        .route("/issues/search", get(handlers::search_issues))
        .route(
            "/issues/:id",
            get(handlers::get_issue)
                .put(handlers::update_issue)
                .delete(handlers::delete_issue),
        )
        .route("/deportments", get(handlers::list_deportments))
        .route("/deportments/:id", get(handlers::get_deportment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
