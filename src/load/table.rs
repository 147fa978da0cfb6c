use crate::error::{DashError, Result};
use crate::types::config::DuplicatePolicy;
use crate::types::record::Keyed;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Rows of one dataset in file order.
#[derive(Debug, Clone)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Keyed> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct keys in first-seen order, i.e. the selector options.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(Keyed::key)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    pub fn default_key(&self) -> Option<&str> {
        self.rows.first().map(Keyed::key)
    }

    pub fn matching(&self, key: &str) -> Vec<&R> {
        self.rows.iter().filter(|row| row.key() == key).collect()
    }

    pub fn first(&self, key: &str) -> Option<&R> {
        self.rows.iter().find(|row| row.key() == key)
    }

    /// Keys that appear on more than one row, with their row counts.
    pub fn duplicates(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for row in &self.rows {
            *counts.entry(row.key()).or_default() += 1;
        }
        self.keys()
            .into_iter()
            .filter_map(|key| {
                let rows = counts.get(key).copied().unwrap_or(0);
                (rows > 1).then(|| (key.to_string(), rows))
            })
            .collect()
    }

    /// Applies the dataset's duplicate-key policy. Under `first` the duplicates
    /// are returned (and logged) so callers can surface them.
    pub fn enforce_unique(&self, dataset: &str, policy: DuplicatePolicy) -> Result<Vec<(String, usize)>> {
        let duplicates = self.duplicates();
        match (policy, duplicates.first()) {
            (DuplicatePolicy::Reject, Some((key, rows))) => Err(DashError::DuplicateKey {
                dataset: dataset.to_string(),
                key: key.clone(),
                rows: *rows,
            }),
            _ => {
                for (key, rows) in &duplicates {
                    warn!(dataset, key = key.as_str(), rows, "duplicate key, first row wins");
                }
                Ok(duplicates)
            }
        }
    }
}

pub fn parse_csv<R: DeserializeOwned>(source: &str, text: &str) -> Result<Vec<R>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<R>, csv::Error>>()
        .map_err(|source_err| DashError::Csv {
            path: source.to_string(),
            source: source_err,
        })
}
