//! FuelDrop operator console
//!
//! A terminal front-end over the order API: customer order actions, the
//! station order list, the admin two-phase status update, and payment form
//! signing.

mod commands;
mod config;

use clap::Parser;
use commands::Command;
use fueldrop_sdk::session::{Session, SessionStore, UserRole};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// FuelDrop - fuel delivery marketplace console
#[derive(Parser, Debug)]
#[command(name = "fueldrop")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./fueldrop.toml")]
    config: PathBuf,

    /// Bearer token for the order API
    #[arg(long, env = "FUELDROP_ACCESS_TOKEN", global = true)]
    token: Option<String>,

    /// Id of the logged-in user
    #[arg(long, env = "FUELDROP_USER_ID", global = true)]
    user_id: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = config::load(&args.config).map_err(|e| {
        tracing::error!("failed to load configuration: {e}");
        e
    })?;
    tracing::debug!("configuration loaded from {:?}", args.config);

    let session = session_store(args.token, args.user_id, args.command.role());
    commands::run(args.command, session, config).await
}

fn session_store(token: Option<String>, user_id: Option<String>, role: UserRole) -> SessionStore {
    match token {
        Some(access_token) => SessionStore::with_session(Session {
            access_token,
            user_id: user_id.unwrap_or_default(),
            role,
        }),
        None => SessionStore::new(),
    }
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
