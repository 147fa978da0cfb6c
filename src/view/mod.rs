//! Selection handling: one key in, one complete [`ViewModel`] out.
//!
//! Nothing here touches the loaded tables mutably, so any number of adapters
//! may call [`compute_view`] concurrently against the same [`Datasets`].

pub mod analyst;
pub mod manager;
pub mod player;

use crate::error::{DashError, Result};
use crate::load::Datasets;
use crate::types::view::{DashboardKind, ViewModel};

pub fn compute_view(kind: DashboardKind, key: &str, datasets: &Datasets) -> Result<ViewModel> {
    match kind {
        DashboardKind::Analyst => Ok(analyst::build(key, datasets.analysts()?)),
        DashboardKind::Player => player::build(key, datasets.players()?),
        DashboardKind::Manager => manager::build(key, datasets.managers()?),
    }
}

/// The view for the initial selection (first key in file order).
pub fn compute_default_view(kind: DashboardKind, datasets: &Datasets) -> Result<ViewModel> {
    let key = datasets
        .default_key(kind)?
        .ok_or_else(|| DashError::EmptyDataset {
            dashboard: kind.as_str().to_string(),
        })?
        .to_string();
    compute_view(kind, &key, datasets)
}

/// Renders counts without a trailing `.0`; other values keep their decimals.
pub(crate) fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
