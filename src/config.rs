use crate::error::{DashError, Result};
use crate::types::config::DashConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "matchlens.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".matchlens/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/matchlens/config.toml";

/// Where a config file sits in the override order, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layer {
    Global,
    Repo,
    Local,
}

pub fn load_config(root: &Path) -> Result<Option<DashConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges the global, repo and local layers into one `DashConfig`.
///
/// Only a data root carrying `matchlens.toml` is configured; otherwise `None`
/// tells the caller to fall back to filename discovery. A merged config must
/// name at least one dataset.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<DashConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.is_file() {
        return Ok(None);
    }

    let layers = [
        (Layer::Global, global_path.map(Path::to_path_buf)),
        (Layer::Repo, Some(repo_path.clone())),
        (Layer::Local, Some(root.join(DEFAULT_LOCAL_FILE))),
    ];

    let mut merged = Value::Table(Map::new());
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.is_file()) else {
            continue;
        };
        debug!(?layer, path = %path.display(), "applying config layer");
        merge_toml(&mut merged, read_toml_value(&path)?);
    }

    let cfg: DashConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DashError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    if !cfg.has_datasets() {
        return Err(DashError::ConfigParse(format!(
            "{}: no dataset configured under [data]",
            repo_path.display()
        )));
    }
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DashError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `overlay` replaces the base.
fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DuplicatePolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[server]
port = 9000

[data]
encodings = ["utf-8", "windows-1252"]
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[server]
host = "127.0.0.1"

[data.managers]
path = "managers.csv"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".matchlens")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[data.managers]
duplicate_keys = "first"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.data.encodings, vec!["utf-8", "windows-1252"]);
        let managers = cfg.data.managers.expect("managers source should exist");
        assert_eq!(managers.path, "managers.csv");
        assert_eq!(managers.duplicate_keys, DuplicatePolicy::First);
    }

    #[test]
    fn load_config_requires_a_dataset() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[server]\nport = 9000\n",
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(
            matches!(err, DashError::ConfigParse(ref message) if message.contains("no dataset configured"))
        );
    }

    #[test]
    fn global_layer_alone_is_ignored() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[data.managers]\npath = \"managers.csv\"\n")
            .expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn arrays_are_replaced_not_appended() {
        let mut base: Value = toml::from_str("[data]\nencodings = [\"utf-8\", \"detect\"]\n")
            .expect("base should parse");
        let overlay: Value =
            toml::from_str("[data]\nencodings = [\"windows-1252\"]\n").expect("overlay should parse");
        merge_toml(&mut base, overlay);
        let encodings = base["data"]["encodings"].as_array().expect("array");
        assert_eq!(encodings.len(), 1);
    }

    #[test]
    fn load_config_validates_merged_result() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[data]\nencodings = [\"no-such-charset\"]\n",
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, DashError::UnknownEncoding(_)));
    }
}
