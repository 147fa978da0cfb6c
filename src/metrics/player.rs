use crate::error::{DashError, Result};
use crate::types::record::PlayerRecord;

pub fn goals_per_match(record: &PlayerRecord) -> Result<f64> {
    checked_ratio(record.goals, record.matches, &record.name, "goals per match")
}

/// Successful passes as a percentage of all passes.
pub fn pass_success_rate(record: &PlayerRecord) -> Result<f64> {
    checked_ratio(
        record.successful_passes,
        record.total_passes,
        &record.name,
        "pass success rate",
    )
    .map(|ratio| ratio * 100.0)
}

pub fn performance_score(goals: f64, pass_success_rate: f64, minutes_played: f64) -> f64 {
    (goals * 2.0 + pass_success_rate * 0.5 + minutes_played / 500.0) / 10.0
}

/// Parses a pitch position written as `(x, y)`.
pub fn parse_position(raw: &str) -> Option<(f64, f64)> {
    let inner = raw
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn checked_ratio(numerator: f64, denominator: f64, key: &str, field: &str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(DashError::DivisionByZero {
            key: key.to_string(),
            field: field.to_string(),
        });
    }
    Ok(numerator / denominator)
}
