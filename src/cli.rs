use crate::types::view::DashboardKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "matchlens",
    version,
    about = "Football analytics dashboards for analyst, player and manager data"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboards over HTTP
    Serve(ServeCommand),
    /// Render one dashboard view to stdout
    View(ViewCommand),
    /// List the selectable keys of a dashboard
    Keys(KeysCommand),
    /// Load every dataset and report what was found
    Check(CheckCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Dashboard {
    Analyst,
    Player,
    Manager,
}

impl From<Dashboard> for DashboardKind {
    fn from(value: Dashboard) -> Self {
        match value {
            Dashboard::Analyst => DashboardKind::Analyst,
            Dashboard::Player => DashboardKind::Player,
            Dashboard::Manager => DashboardKind::Manager,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ServeCommand {
    /// Directory holding the datasets (and optionally matchlens.toml)
    pub path: PathBuf,
    #[arg(long)]
    pub host: Option<String>,
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct ViewCommand {
    pub path: PathBuf,
    #[arg(value_enum)]
    pub dashboard: Dashboard,
    /// Selection key; defaults to the first row of the dataset
    pub key: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct KeysCommand {
    pub path: PathBuf,
    #[arg(value_enum)]
    pub dashboard: Dashboard,
}

#[derive(Args)]
pub struct CheckCommand {
    pub path: PathBuf,
}
