//! Shared server state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::models::QuestionBanks;
use crate::session::SessionStore;

/// Session store wrapped in Arc<Mutex> for async access.
pub type SharedSessions = Arc<Mutex<SessionStore>>;

/// Handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup.
    pub banks: Arc<QuestionBanks>,
    pub sessions: SharedSessions,
}

impl AppState {
    pub fn new(banks: Arc<QuestionBanks>, session_ttl: Duration) -> Self {
        Self {
            banks,
            sessions: Arc::new(Mutex::new(SessionStore::new(session_ttl))),
        }
    }
}
