use std::collections::HashMap;
use tracing::debug;

pub type Formations = HashMap<String, String>;

const TEAM_PREFIX: &str = "Team: ";
const FORMATION_SEPARATOR: &str = " - Formation: ";

/// Builds the team → formation map from `Team: <name> - Formation: <formation>` lines.
/// Lines that do not follow the pattern are skipped; a repeated team keeps its last formation.
pub fn parse_formations(text: &str) -> Formations {
    let mut formations = Formations::new();
    for (number, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some((team, formation)) => {
                formations.insert(team.to_string(), formation.to_string());
            }
            None => debug!(line = number + 1, "skipping formation line"),
        }
    }
    formations
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(TEAM_PREFIX)?;
    let (team, formation) = rest.rsplit_once(FORMATION_SEPARATOR)?;
    Some((team.trim(), formation.trim()))
}
