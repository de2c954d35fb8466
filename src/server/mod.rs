//! Quiz web server.
//!
//! Serves the landing page, one form per topic and the result page over HTTP.

mod error;
mod routes;
mod server;
mod state;

pub use error::AppError;
pub use routes::{SESSION_COOKIE, router};
pub use server::{DEFAULT_PORT, ServerConfig, run};
pub use state::{AppState, SharedSessions};
