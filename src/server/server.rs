//! HTTP server implementation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::time;

use crate::QuizError;
use crate::models::QuestionBanks;
use crate::session::DEFAULT_SESSION_TTL;

use super::routes::router;
use super::state::{AppState, SharedSessions};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 8712;

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Idle time after which a session is forgotten.
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }
}

/// Run the quiz server until Ctrl-C.
pub async fn run(config: ServerConfig, banks: Arc<QuestionBanks>) -> Result<(), QuizError> {
    let state = AppState::new(banks, config.session_ttl);

    tokio::spawn(purge_expired_sessions(Arc::clone(&state.sessions)));

    let addr = SocketAddr::from((config.host, config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        local_addr = %listener.local_addr()?,
        session_ttl_secs = config.session_ttl.as_secs(),
        "starting quiz server"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("quiz server stopped");
    Ok(())
}

async fn purge_expired_sessions(sessions: SharedSessions) {
    let mut interval = time::interval(PURGE_INTERVAL);
    loop {
        interval.tick().await;
        let (purged, remaining, ttl) = {
            let mut sessions = sessions.lock().await;
            (sessions.purge_expired(), sessions.len(), sessions.ttl())
        };
        if purged > 0 {
            tracing::debug!(
                purged,
                remaining,
                ttl_secs = ttl.as_secs(),
                "purged expired sessions"
            );
        }
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
