//! HTTP adapter: turns selection requests into `compute_view` calls.
//!
//! The datasets are shared behind an `Arc` and only ever read, so requests
//! are served concurrently without locking.

use crate::error::{DashError, Result};
use crate::load::Datasets;
use crate::types::view::DashboardKind;
use crate::view::{compute_default_view, compute_view};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Reply};

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct DashboardInfo {
    id: DashboardKind,
    title: &'static str,
    default_key: Option<String>,
}

pub fn bind_address(host: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = host
        .parse()
        .map_err(|_| DashError::ConfigParse(format!("invalid server.host: {host}")))?;
    Ok(SocketAddr::new(ip, port))
}

/// Binds `addr` and serves until the process is stopped. Bind failures come
/// back as `DashError::Bind`.
pub async fn serve(datasets: Datasets, addr: SocketAddr) -> Result<()> {
    let datasets = Arc::new(datasets);
    let dashboards = datasets.available();
    let (bound, server) = warp::serve(routes(datasets))
        .try_bind_ephemeral(addr)
        .map_err(|source| DashError::Bind { addr, source })?;
    info!(addr = %bound, ?dashboards, "starting dashboard server");
    server.await;
    Ok(())
}

pub fn routes(
    datasets: Arc<Datasets>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let datasets_filter = warp::any().map(move || datasets.clone());

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(INDEX_HTML));

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(datasets_filter.clone())
        .map(|datasets: Arc<Datasets>| {
            warp::reply::json(&serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "dashboards": datasets.available(),
            }))
        });

    let dashboards = warp::path!("api" / "dashboards")
        .and(warp::get())
        .and(datasets_filter.clone())
        .map(|datasets: Arc<Datasets>| {
            let listed: Vec<DashboardInfo> = datasets
                .available()
                .into_iter()
                .map(|kind| DashboardInfo {
                    id: kind,
                    title: kind.title(),
                    default_key: datasets
                        .default_key(kind)
                        .ok()
                        .flatten()
                        .map(str::to_string),
                })
                .collect();
            warp::reply::json(&listed)
        });

    let keys = warp::path!("api" / String / "keys")
        .and(warp::get())
        .and(datasets_filter.clone())
        .and_then(|dashboard: String, datasets: Arc<Datasets>| async move {
            Ok::<_, warp::Rejection>(get_keys(&dashboard, &datasets))
        });

    let view = warp::path!("api" / String / "view")
        .and(warp::get())
        .and(warp::query::<ViewParams>())
        .and(datasets_filter)
        .and_then(
            |dashboard: String, params: ViewParams, datasets: Arc<Datasets>| async move {
                Ok::<_, warp::Rejection>(get_view(&dashboard, params, &datasets))
            },
        );

    index
        .or(health)
        .or(dashboards)
        .or(keys)
        .or(view)
        .with(warp::trace::request())
}

fn get_keys(dashboard: &str, datasets: &Datasets) -> Response {
    let result = parse_dashboard(dashboard).and_then(|kind| datasets.keys(kind));
    match result {
        Ok(keys) => warp::reply::json(&keys).into_response(),
        Err(err) => error_reply(err),
    }
}

fn get_view(dashboard: &str, params: ViewParams, datasets: &Datasets) -> Response {
    let result = parse_dashboard(dashboard).and_then(|kind| match params.key.as_deref() {
        Some(key) => compute_view(kind, key, datasets),
        None => compute_default_view(kind, datasets),
    });
    match result {
        Ok(view) => {
            info!(dashboard, selection = view.selection.as_str(), "served view");
            warp::reply::json(&view).into_response()
        }
        Err(err) => error_reply(err),
    }
}

fn parse_dashboard(slug: &str) -> Result<DashboardKind> {
    DashboardKind::from_slug(slug).ok_or_else(|| DashError::DashboardUnavailable {
        dashboard: slug.to_string(),
    })
}

fn error_reply(err: DashError) -> Response {
    let (status, code) = match &err {
        DashError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DashError::DashboardUnavailable { .. } => {
            (StatusCode::NOT_FOUND, "DASHBOARD_UNAVAILABLE")
        }
        DashError::EmptyDataset { .. } => (StatusCode::NOT_FOUND, "EMPTY_DATASET"),
        DashError::DivisionByZero { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "DIVISION_BY_ZERO")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
    };
    warn!(code, error = %err, "request failed");
    let body = ErrorResponse {
        error: ErrorDetail {
            code: code.to_string(),
            message: err.to_string(),
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}
