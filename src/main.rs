use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use web_quiz::server::DEFAULT_PORT;
use web_quiz::{Quiz, ServerConfig, Topic};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "QUIZ_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "QUIZ_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// JSON file to load the question banks from (defaults to the built-in banks)
    #[arg(short, long, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Seconds of inactivity after which a session expires
    #[arg(long, env = "QUIZ_SESSION_TTL", default_value_t = 3600)]
    session_ttl: u64,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::builtin()?,
    };

    for topic in Topic::ALL {
        tracing::info!(%topic, questions = quiz.banks().get(topic).len(), "loaded question bank");
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        session_ttl: Duration::from_secs(args.session_ttl),
    };

    quiz.serve(config).await?;
    Ok(())
}
