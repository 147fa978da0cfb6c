//! Closed-form scoring used by the dashboards. Everything here is pure.

pub mod analyst;
pub mod manager;
pub mod player;
pub mod ranking;

/// Goals per match at which the attack and defense scales pivot.
pub const PIVOT_GOALS_PER_MATCH: f64 = 1.5;
