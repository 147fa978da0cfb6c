//! Reads the configured CSV/TXT inputs into immutable in-memory tables.

pub mod encoding;
pub mod formations;
pub mod table;

use crate::error::{DashError, Result};
use crate::scan::filesystem::sha256_hex;
use crate::types::config::{DashConfig, DuplicatePolicy};
use crate::types::record::{AnalystRecord, Keyed, ManagerRecord, PlayerRecord};
use crate::types::view::DashboardKind;
use formations::Formations;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use table::Table;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AnalystData {
    pub table: Table<AnalystRecord>,
    pub formations: Formations,
}

#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub dashboard: DashboardKind,
    pub path: String,
    pub rows: usize,
    pub keys: usize,
    pub encoding: &'static str,
    pub sha256: String,
    pub duplicates: Vec<(String, usize)>,
}

/// Everything the dashboards read. Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub analysts: Option<AnalystData>,
    pub players: Option<Table<PlayerRecord>>,
    pub managers: Option<Table<ManagerRecord>>,
    pub summaries: Vec<DatasetSummary>,
}

impl Datasets {
    pub fn analysts(&self) -> Result<&AnalystData> {
        self.analysts
            .as_ref()
            .ok_or_else(|| unavailable(DashboardKind::Analyst))
    }

    pub fn players(&self) -> Result<&Table<PlayerRecord>> {
        self.players
            .as_ref()
            .ok_or_else(|| unavailable(DashboardKind::Player))
    }

    pub fn managers(&self) -> Result<&Table<ManagerRecord>> {
        self.managers
            .as_ref()
            .ok_or_else(|| unavailable(DashboardKind::Manager))
    }

    pub fn available(&self) -> Vec<DashboardKind> {
        DashboardKind::ALL
            .into_iter()
            .filter(|kind| self.keys(*kind).is_ok())
            .collect()
    }

    pub fn keys(&self, kind: DashboardKind) -> Result<Vec<&str>> {
        Ok(match kind {
            DashboardKind::Analyst => self.analysts()?.table.keys(),
            DashboardKind::Player => self.players()?.keys(),
            DashboardKind::Manager => self.managers()?.keys(),
        })
    }

    /// The selection shown before the user picks anything: the first row's key.
    pub fn default_key(&self, kind: DashboardKind) -> Result<Option<&str>> {
        Ok(match kind {
            DashboardKind::Analyst => self.analysts()?.table.default_key(),
            DashboardKind::Player => self.players()?.default_key(),
            DashboardKind::Manager => self.managers()?.default_key(),
        })
    }
}

fn unavailable(kind: DashboardKind) -> DashError {
    DashError::DashboardUnavailable {
        dashboard: kind.as_str().to_string(),
    }
}

pub fn load(root: &Path, cfg: &DashConfig) -> Result<Datasets> {
    if !cfg.has_datasets() {
        return Err(DashError::NoDatasets(root.display().to_string()));
    }

    let encodings = &cfg.data.encodings;
    let mut datasets = Datasets::default();

    if let Some(source) = &cfg.data.analysts {
        let (table, summary) = load_table::<AnalystRecord>(
            root,
            &source.path,
            encodings,
            DashboardKind::Analyst,
            None,
        )?;
        let formations = match &source.formations {
            Some(path) => load_formations(&resolve(root, path)?, encodings)?,
            None => Formations::new(),
        };
        datasets.summaries.push(summary);
        datasets.analysts = Some(AnalystData { table, formations });
    }

    if let Some(source) = &cfg.data.players {
        let (table, summary) = load_table::<PlayerRecord>(
            root,
            &source.path,
            encodings,
            DashboardKind::Player,
            Some(source.duplicate_keys),
        )?;
        datasets.summaries.push(summary);
        datasets.players = Some(table);
    }

    if let Some(source) = &cfg.data.managers {
        let (table, summary) = load_table::<ManagerRecord>(
            root,
            &source.path,
            encodings,
            DashboardKind::Manager,
            Some(source.duplicate_keys),
        )?;
        datasets.summaries.push(summary);
        datasets.managers = Some(table);
    }

    Ok(datasets)
}

fn load_table<R: Keyed + DeserializeOwned>(
    root: &Path,
    relative: &str,
    encodings: &[String],
    kind: DashboardKind,
    policy: Option<DuplicatePolicy>,
) -> Result<(Table<R>, DatasetSummary)> {
    let path = resolve(root, relative)?;
    let (decoded, bytes) = encoding::read_decoded(&path, encodings)?;
    let source = path.display().to_string();
    let table = Table::new(table::parse_csv::<R>(&source, &decoded.text)?);
    let duplicates = match policy {
        Some(policy) => table.enforce_unique(kind.as_str(), policy)?,
        None => Vec::new(),
    };
    if table.is_empty() {
        warn!(dashboard = kind.as_str(), path = source.as_str(), "dataset has no rows");
    }

    info!(
        dashboard = kind.as_str(),
        path = source.as_str(),
        rows = table.len(),
        encoding = decoded.encoding,
        "loaded dataset"
    );

    let summary = DatasetSummary {
        dashboard: kind,
        path: source,
        rows: table.len(),
        keys: table.keys().len(),
        encoding: decoded.encoding,
        sha256: sha256_hex(&bytes),
        duplicates,
    };
    Ok((table, summary))
}

fn load_formations(path: &Path, encodings: &[String]) -> Result<Formations> {
    let (decoded, _) = encoding::read_decoded(path, encodings)?;
    let formations = formations::parse_formations(&decoded.text);
    info!(path = %path.display(), teams = formations.len(), "loaded formations");
    Ok(formations)
}

fn resolve(root: &Path, relative: &str) -> Result<PathBuf> {
    let path = root.join(relative);
    if !path.is_file() {
        return Err(DashError::DatasetNotFound(path.display().to_string()));
    }
    Ok(path)
}
