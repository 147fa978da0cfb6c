use super::PIVOT_GOALS_PER_MATCH;
use crate::types::record::ManagerRecord;
use crate::types::scoring::ScoreCard;

const OFFENSIVE_AT_PIVOT: f64 = 6.0;
const OFFENSIVE_SLOPE: f64 = 2.67;
const OFFENSIVE_MAX: f64 = 10.0;
const DEFENSIVE_AT_PIVOT: f64 = 5.0;
const DEFENSIVE_SLOPE: f64 = 3.33;
const DEFENSIVE_MIN: f64 = 0.0;

/// Wins as a percentage of matches; 0 when no matches were played.
pub fn win_rate(wins: f64, matches: f64) -> f64 {
    if matches > 0.0 {
        wins / matches * 100.0
    } else {
        0.0
    }
}

/// `(scored, conceded)` per match; both 0 when no matches were played.
pub fn goals_per_match(goals_scored: f64, goals_conceded: f64, matches: f64) -> (f64, f64) {
    if matches > 0.0 {
        (goals_scored / matches, goals_conceded / matches)
    } else {
        (0.0, 0.0)
    }
}

pub fn offensive_performance(goals_scored_per_match: f64) -> f64 {
    let score = if goals_scored_per_match < PIVOT_GOALS_PER_MATCH {
        OFFENSIVE_AT_PIVOT * (goals_scored_per_match / PIVOT_GOALS_PER_MATCH)
    } else {
        OFFENSIVE_AT_PIVOT + (goals_scored_per_match - PIVOT_GOALS_PER_MATCH) * OFFENSIVE_SLOPE
    };
    score.min(OFFENSIVE_MAX)
}

pub fn defensive_performance(goals_conceded_per_match: f64) -> f64 {
    let score = if goals_conceded_per_match < PIVOT_GOALS_PER_MATCH {
        DEFENSIVE_AT_PIVOT + (PIVOT_GOALS_PER_MATCH - goals_conceded_per_match) * DEFENSIVE_SLOPE
    } else {
        DEFENSIVE_AT_PIVOT - (goals_conceded_per_match - PIVOT_GOALS_PER_MATCH) * DEFENSIVE_SLOPE
    };
    score.max(DEFENSIVE_MIN)
}

pub fn overall_performance(win_rate: f64, offensive_score: f64, defensive_score: f64) -> f64 {
    (win_rate * 0.4 + offensive_score * 0.3 + defensive_score * 0.3) / 10.0
}

pub fn score_card(record: &ManagerRecord) -> ScoreCard {
    let win_rate = win_rate(record.wins, record.matches);
    let (scored, conceded) =
        goals_per_match(record.goals_scored, record.goals_conceded, record.matches);
    let offensive = offensive_performance(scored);
    let defensive = defensive_performance(conceded);
    ScoreCard {
        win_rate,
        goals_scored_per_match: scored,
        goals_conceded_per_match: conceded,
        offensive,
        defensive,
        overall: overall_performance(win_rate, offensive, defensive),
    }
}
