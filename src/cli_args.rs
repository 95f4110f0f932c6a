use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Clone, Parser)]
#[command(version = star_trade_router::util::version::version_label(), about, long_about = None)]
pub struct Cli {
    /// optimizer configuration file (defaults to the user config directory)
    #[arg(long, global = true, env("STAR_TRADE_ROUTER_CONFIG"))]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Subcommand)]
pub enum Commands {
    /// ranks every route between two systems
    Optimize {
        #[arg(long, env("STAR_TRADE_ROUTER_SCENARIO"))]
        scenario: PathBuf,
        /// source system id or name
        #[arg(long)]
        source: String,
        /// destination system id or name
        #[arg(long)]
        destination: String,
        /// fuel type name (defaults to the first one of the scenario)
        #[arg(long)]
        fuel: Option<String>,
        #[arg(long)]
        max_waypoints: Option<usize>,
        #[arg(long)]
        capacity: Option<u32>,
        /// price at most this many candidates
        #[arg(long)]
        limit: Option<usize>,
        /// print stored route records as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// where to archive the result (defaults to the user data directory)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        no_archive: bool,
    },
    /// lists the systems of a scenario
    Systems {
        #[arg(long, env("STAR_TRADE_ROUTER_SCENARIO"))]
        scenario: PathBuf,
    },
    /// lists available fuel types
    Fuels {
        #[arg(long, env("STAR_TRADE_ROUTER_SCENARIO"))]
        scenario: Option<PathBuf>,
    },
    /// shows the last archived optimization
    Last {
        #[arg(long)]
        archive: Option<PathBuf>,
    },
    /// prints the effective configuration
    Config {
        /// also write it to the config file
        #[arg(long)]
        write: bool,
    },
}
