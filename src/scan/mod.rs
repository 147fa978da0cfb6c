pub mod filesystem;

use crate::types::config::{
    AnalystSource, DashConfig, DuplicatePolicy, TableSource, DEFAULT_ANALYSTS_FILE,
    DEFAULT_FORMATIONS_FILE, DEFAULT_MANAGERS_FILE, DEFAULT_PLAYERS_FILE,
};
use crate::types::view::DashboardKind;
use filesystem::list_files;
use std::path::{Path, PathBuf};

const SCAN_DEPTH: usize = 2;

#[derive(Debug, Clone)]
pub struct Discovery {
    pub config: DashConfig,
    pub missing: Vec<DashboardKind>,
}

/// Builds a config from the well-known dataset filenames found under `root`
/// (the root itself or one directory below). Used when no matchlens.toml exists.
pub fn discover(root: &Path) -> Discovery {
    let files = list_files(root, SCAN_DEPTH);
    let find = |name: &str| -> Option<String> {
        files
            .iter()
            .find(|file| file.file_name().is_some_and(|file_name| file_name == name))
            .map(|file| relative_to(root, file))
    };

    let mut config = DashConfig::default();
    config.data.analysts = find(DEFAULT_ANALYSTS_FILE).map(|path| AnalystSource {
        path,
        formations: find(DEFAULT_FORMATIONS_FILE),
    });
    // The players export holds one row per pass, so repeated names are expected.
    config.data.players = find(DEFAULT_PLAYERS_FILE)
        .map(|path| TableSource::with_policy(path, DuplicatePolicy::First));
    config.data.managers = find(DEFAULT_MANAGERS_FILE).map(TableSource::new);

    let missing = [
        (DashboardKind::Analyst, config.data.analysts.is_none()),
        (DashboardKind::Player, config.data.players.is_none()),
        (DashboardKind::Manager, config.data.managers.is_none()),
    ]
    .into_iter()
    .filter_map(|(kind, absent)| absent.then_some(kind))
    .collect();

    Discovery { config, missing }
}

fn relative_to(root: &Path, file: &Path) -> String {
    file.strip_prefix(root)
        .map(PathBuf::from)
        .unwrap_or_else(|_| file.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_default_filenames() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("data")).expect("data dir should create");
        fs::write(dir.path().join("data").join(DEFAULT_ANALYSTS_FILE), "x").expect("write");
        fs::write(dir.path().join("data").join(DEFAULT_FORMATIONS_FILE), "x").expect("write");
        fs::write(dir.path().join(DEFAULT_MANAGERS_FILE), "x").expect("write");

        let discovery = discover(dir.path());
        let analysts = discovery.config.data.analysts.expect("analysts should be found");
        assert_eq!(
            PathBuf::from(&analysts.path),
            PathBuf::from("data").join(DEFAULT_ANALYSTS_FILE)
        );
        assert!(analysts.formations.is_some());
        assert_eq!(
            discovery.config.data.managers.map(|source| source.path),
            Some(DEFAULT_MANAGERS_FILE.to_string())
        );
        assert_eq!(discovery.missing, vec![DashboardKind::Player]);
    }

    #[test]
    fn discovered_players_keep_first_row_per_name() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_PLAYERS_FILE), "x").expect("write");
        fs::write(dir.path().join(DEFAULT_MANAGERS_FILE), "x").expect("write");

        let data = discover(dir.path()).config.data;
        let players = data.players.expect("players should be found");
        assert_eq!(players.duplicate_keys, DuplicatePolicy::First);
        let managers = data.managers.expect("managers should be found");
        assert_eq!(managers.duplicate_keys, DuplicatePolicy::Reject);
    }

    #[test]
    fn discover_in_empty_dir_finds_nothing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let discovery = discover(dir.path());
        assert!(!discovery.config.has_datasets());
        assert_eq!(discovery.missing.len(), 3);
    }
}
