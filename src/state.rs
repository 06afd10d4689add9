//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AccessGate, LinkService};
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service backed by SQLite, as used by the HTTP front.
pub type SqliteLinkService = LinkService<SqliteLinkRepository>;

/// Application state cloned into each request.
///
/// Built once at startup from an explicitly constructed pool; there is no
/// process-wide database handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SqliteLinkService>,
    pub access_gate: Arc<AccessGate>,
}

impl AppState {
    /// Wires the repository, service and gate around `pool`.
    pub fn new(pool: Arc<SqlitePool>, access_gate: AccessGate) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            access_gate: Arc::new(access_gate),
        }
    }
}
