//! Civica REST Server
//!
//! HTTP API for issue reporting, community events, personalized
//! recommendations, and search analytics.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use civica::server::startup::start_server;
use civica::store::Store;

#[derive(Parser)]
#[command(name = "civica_server")]
#[command(about = "Civica REST API Server")]
#[command(version)]
struct Args {
  /// Server bind address
  #[arg(long, default_value = "127.0.0.1:3000")]
  bind: SocketAddr,

  /// Database path (defaults to CIVICA_DB or the platform data directory)
  #[arg(long)]
  database: Option<PathBuf>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info")
  } else {
    EnvFilter::new("civica=info,tower_http=info,warn")
  };

  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Civica REST server");

  let store = match &args.database {
    Some(path) => Store::open(path)?,
    None => Store::open_default()?,
  };

  start_server(args.bind, store).await?;

  Ok(())
}
