use crate::error::DashError;
use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DETECT_LABEL: &str = "detect";

pub const DEFAULT_ANALYSTS_FILE: &str = "Performance Analysts.csv";
pub const DEFAULT_FORMATIONS_FILE: &str = "teams.txt";
pub const DEFAULT_PLAYERS_FILE: &str = "players_statistics.csv";
pub const DEFAULT_MANAGERS_FILE: &str = "la_liga_managers_2024.csv";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Tried in order; `detect` asks the charset detector for a guess.
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,
    pub analysts: Option<AnalystSource>,
    pub players: Option<TableSource>,
    pub managers: Option<TableSource>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            encodings: default_encodings(),
            analysts: None,
            players: None,
            managers: None,
        }
    }
}

pub fn default_encodings() -> Vec<String> {
    ["utf-8", "iso-8859-1", "latin1", DETECT_LABEL]
        .iter()
        .map(|label| label.to_string())
        .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalystSource {
    pub path: String,
    pub formations: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSource {
    pub path: String,
    #[serde(default)]
    pub duplicate_keys: DuplicatePolicy,
}

impl TableSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self::with_policy(path, DuplicatePolicy::default())
    }

    pub fn with_policy(path: impl Into<String>, duplicate_keys: DuplicatePolicy) -> Self {
        Self {
            path: path.into(),
            duplicate_keys,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    First,
}

impl DashConfig {
    pub fn validate(&self) -> Result<(), DashError> {
        if self.server.port == 0 {
            return Err(DashError::ConfigParse(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(DashError::ConfigParse(
                "server.host cannot be empty".to_string(),
            ));
        }

        if self.data.encodings.is_empty() {
            return Err(DashError::ConfigParse(
                "data.encodings must list at least one encoding".to_string(),
            ));
        }
        for label in &self.data.encodings {
            if label != DETECT_LABEL && encoding_rs::Encoding::for_label(label.as_bytes()).is_none()
            {
                return Err(DashError::UnknownEncoding(label.clone()));
            }
        }

        let paths = [
            ("data.analysts.path", self.data.analysts.as_ref().map(|a| &a.path)),
            ("data.players.path", self.data.players.as_ref().map(|p| &p.path)),
            ("data.managers.path", self.data.managers.as_ref().map(|m| &m.path)),
        ];
        for (name, path) in paths {
            if path.is_some_and(|path| path.trim().is_empty()) {
                return Err(DashError::ConfigParse(format!("{name} cannot be empty")));
            }
        }

        Ok(())
    }

    pub fn has_datasets(&self) -> bool {
        self.data.analysts.is_some() || self.data.players.is_some() || self.data.managers.is_some()
    }
}
