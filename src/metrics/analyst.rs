use super::PIVOT_GOALS_PER_MATCH;

const ATTACK_AT_PIVOT: f64 = 6.0;
const DEFENSE_AT_PIVOT: f64 = 5.0;
const SLOPE: f64 = 2.0;

/// Linear attack rating, 6.0 at 1.5 goals. Not clamped.
pub fn attack_performance(goals_scored: f64) -> f64 {
    ATTACK_AT_PIVOT + (goals_scored - PIVOT_GOALS_PER_MATCH) * SLOPE
}

/// Linear defense rating, 5.0 at 1.5 conceded, falling as more are conceded. Not clamped.
pub fn defense_performance(goals_conceded: f64) -> f64 {
    DEFENSE_AT_PIVOT - (goals_conceded - PIVOT_GOALS_PER_MATCH) * SLOPE
}
