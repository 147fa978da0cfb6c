mod cli;
mod config;
mod error;
mod load;
mod metrics;
mod report;
mod scan;
mod server;
mod types;
mod view;

use crate::error::DashError;
use crate::types::config::DashConfig;
use crate::types::view::DashboardKind;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config from matchlens.toml when present, otherwise from the default
/// dataset filenames found under `path`.
fn resolve_config(path: &Path) -> Result<(DashConfig, Vec<DashboardKind>), DashError> {
    if !path.exists() {
        return Err(DashError::PathNotFound(path.display().to_string()));
    }
    if let Some(cfg) = config::load_config(path)? {
        return Ok((cfg, Vec::new()));
    }
    let discovery = scan::discover(path);
    for kind in &discovery.missing {
        tracing::warn!(dashboard = kind.as_str(), "no dataset found, dashboard disabled");
    }
    Ok((discovery.config, discovery.missing))
}

fn run() -> Result<i32, DashError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Serve(cmd) => {
            let (mut cfg, _) = resolve_config(&cmd.path)?;
            if let Some(host) = cmd.host {
                cfg.server.host = host;
            }
            if let Some(port) = cmd.port {
                cfg.server.port = port;
            }
            cfg.validate()?;

            let datasets = load::load(&cmd.path, &cfg)?;
            let addr = server::bind_address(&cfg.server.host, cfg.server.port)?;
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(datasets, addr))?;
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::View(cmd) => {
            let (cfg, _) = resolve_config(&cmd.path)?;
            let datasets = load::load(&cmd.path, &cfg)?;
            let kind = DashboardKind::from(cmd.dashboard);
            let model = match cmd.key.as_deref() {
                Some(key) => view::compute_view(kind, key, &datasets)?,
                None => view::compute_default_view(kind, &datasets)?,
            };

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&model, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Keys(cmd) => {
            let (cfg, _) = resolve_config(&cmd.path)?;
            let datasets = load::load(&cmd.path, &cfg)?;
            for key in datasets.keys(cmd.dashboard.into())? {
                println!("{key}");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let (cfg, missing) = resolve_config(&cmd.path)?;
            let datasets = load::load(&cmd.path, &cfg)?;

            for summary in &datasets.summaries {
                println!(
                    "{}: {} rows, {} keys, {} [{}]",
                    summary.dashboard.as_str(),
                    summary.rows,
                    summary.keys,
                    summary.path,
                    summary.encoding
                );
                println!("  sha256 {}", summary.sha256);
                for (key, rows) in &summary.duplicates {
                    println!("  [WARN] duplicate key {key} ({rows} rows)");
                }
            }
            for kind in &missing {
                println!("{}: no dataset found", kind.as_str());
            }

            let has_duplicates = datasets
                .summaries
                .iter()
                .any(|summary| !summary.duplicates.is_empty());
            if has_duplicates || !missing.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
