//! `trackd` - In-memory issue tracker service.
//!
//! Serves issue CRUD, the static deportment catalog, and the search
//! endpoint over HTTP. All state lives in process memory; nothing is
//! persisted across restarts.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use trackd::config::Config;
use trackd::server::{self, AppState};
use tracker_lib::{DeportmentCatalog, IssueStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    trackd::logging::init_logging(config.verbose, config.quiet)?;

    let store = IssueStore::new(DeportmentCatalog::builtin());
    let app = server::app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(addr = %config.bind, "tracker service listening");
    axum::serve(listener, app).await?;

    Ok(())
}
