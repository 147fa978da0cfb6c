use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("dataset file not found: {0}")]
    DatasetNotFound(String),

    #[error("no datasets found under {0}")]
    NoDatasets(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("could not decode {path} with any of: {tried}")]
    EncodingExhausted { path: String, tried: String },

    #[error("csv error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("duplicate key '{key}' in {dataset} dataset ({rows} rows)")]
    DuplicateKey {
        dataset: String,
        key: String,
        rows: usize,
    },

    #[error("{dashboard} dataset has no rows")]
    EmptyDataset { dashboard: String },

    #[error("could not bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: warp::Error,
    },

    #[error("{dashboard} dashboard is not configured")]
    DashboardUnavailable { dashboard: String },

    #[error("no {dashboard} record found for '{key}'")]
    NotFound { dashboard: String, key: String },

    #[error("division by zero computing {field} for '{key}'")]
    DivisionByZero { key: String, field: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
