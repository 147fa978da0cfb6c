use serde::Serialize;

pub type Score = f64;

/// Derived manager metrics. Recomputed per call, never stored on the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreCard {
    pub win_rate: Score,
    pub goals_scored_per_match: Score,
    pub goals_conceded_per_match: Score,
    pub offensive: Score,
    pub defensive: Score,
    pub overall: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedManager {
    pub manager: String,
    pub team: String,
    pub card: ScoreCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// Count of managers scoring at or above the selected one.
    pub rank: usize,
    /// Every manager, best overall score first.
    pub sorted: Vec<RankedManager>,
}
