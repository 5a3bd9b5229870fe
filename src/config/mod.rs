//! Service configuration.

use std::net::SocketAddr;

use clap::Parser;

/// Command-line configuration for the tracker service.
#[derive(Debug, Parser)]
#[command(name = "trackd", version, about = "In-memory issue tracker service")]
pub struct Config {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "TRACKD_BIND", default_value = "127.0.0.1:8888")]
    pub bind: SocketAddr,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
