use serde::Deserialize;

/// A row that can be looked up by its natural key.
pub trait Keyed {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalystRecord {
    #[serde(rename = "Performance Analyst")]
    pub analyst: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Goals Scored")]
    pub goals_scored: f64,
    #[serde(rename = "Goals Conceded")]
    pub goals_conceded: f64,
    #[serde(rename = "Top Scorer (Goals)")]
    pub top_scorer: String,
    #[serde(rename = "Top Clean Sheet Keeper (Clean Sheets)")]
    pub top_clean_sheet_keeper: String,
    #[serde(rename = "Passes Attempted")]
    pub passes_attempted: f64,
    #[serde(rename = "Passes Completed")]
    pub passes_completed: f64,
    #[serde(rename = "Set Piece Goals")]
    pub set_piece_goals: f64,
    #[serde(rename = "Penalties Awarded")]
    pub penalties_awarded: f64,
    #[serde(rename = "Penalty Goals")]
    pub penalty_goals: f64,
}

impl Keyed for AnalystRecord {
    fn key(&self) -> &str {
        &self.analyst
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "player name")]
    pub name: String,
    #[serde(rename = "player team")]
    pub team: String,
    #[serde(rename = "Minutes Played")]
    pub minutes_played: f64,
    #[serde(rename = "Matches")]
    pub matches: f64,
    #[serde(rename = "goals")]
    pub goals: f64,
    #[serde(rename = "Total Passes")]
    pub total_passes: f64,
    #[serde(rename = "Successful Passes")]
    pub successful_passes: f64,
    // "(x, y)" pitch coordinates; absent in aggregate-only exports.
    #[serde(rename = "Pass Start Position", default)]
    pub pass_start: Option<String>,
    #[serde(rename = "Pass End Position", default)]
    pub pass_end: Option<String>,
}

impl Keyed for PlayerRecord {
    fn key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManagerRecord {
    #[serde(rename = "Manager")]
    pub manager: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Matches")]
    pub matches: f64,
    #[serde(rename = "Wins")]
    pub wins: f64,
    #[serde(rename = "Draws")]
    pub draws: f64,
    #[serde(rename = "Losses")]
    pub losses: f64,
    #[serde(rename = "Goals Scored")]
    pub goals_scored: f64,
    #[serde(rename = "Goals Conceded")]
    pub goals_conceded: f64,
    #[serde(rename = "Trophies")]
    pub trophies: String,
    #[serde(rename = "Goalkeeper")]
    pub goalkeeper: String,
    #[serde(rename = "Defenders")]
    pub defenders: String,
    #[serde(rename = "Midfielders")]
    pub midfielders: String,
    #[serde(rename = "Forwards")]
    pub forwards: String,
}

impl Keyed for ManagerRecord {
    fn key(&self) -> &str {
        &self.manager
    }
}
