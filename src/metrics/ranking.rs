use super::manager::score_card;
use crate::error::{DashError, Result};
use crate::types::record::{Keyed, ManagerRecord};
use crate::types::scoring::{RankedManager, Ranking};
use crate::types::view::DashboardKind;

/// Scores every manager and places `selected` among them.
///
/// The rank is the number of managers whose overall score is at or above the
/// selected one, so tied managers share a rank. The returned list is a fresh
/// copy sorted best-first; `records` is left untouched.
pub fn ranking(records: &[ManagerRecord], selected: &str) -> Result<Ranking> {
    let mut scored: Vec<RankedManager> = records
        .iter()
        .map(|record| RankedManager {
            manager: record.key().to_string(),
            team: record.team.clone(),
            card: score_card(record),
        })
        .collect();

    let selected_score = scored
        .iter()
        .find(|entry| entry.manager == selected)
        .map(|entry| entry.card.overall)
        .ok_or_else(|| DashError::NotFound {
            dashboard: DashboardKind::Manager.as_str().to_string(),
            key: selected.to_string(),
        })?;

    let rank = scored
        .iter()
        .filter(|entry| entry.card.overall >= selected_score)
        .count();

    scored.sort_by(|a, b| b.card.overall.total_cmp(&a.card.overall));

    Ok(Ranking {
        rank,
        sorted: scored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::manager::tests::manager;

    fn league() -> Vec<ManagerRecord> {
        vec![
            manager("Mid", 20.0, 10.0, 30.0, 20.0),
            manager("Top", 20.0, 16.0, 50.0, 10.0),
            manager("Low", 20.0, 2.0, 12.0, 40.0),
            manager("Upper", 20.0, 12.0, 35.0, 18.0),
        ]
    }

    #[test]
    fn best_is_first_and_worst_is_last() {
        let records = league();
        assert_eq!(ranking(&records, "Top").expect("rank").rank, 1);
        assert_eq!(ranking(&records, "Upper").expect("rank").rank, 2);
        assert_eq!(ranking(&records, "Mid").expect("rank").rank, 3);
        assert_eq!(ranking(&records, "Low").expect("rank").rank, records.len());
    }

    #[test]
    fn sorted_list_is_descending_by_overall() {
        let result = ranking(&league(), "Mid").expect("rank");
        let names: Vec<&str> = result.sorted.iter().map(|e| e.manager.as_str()).collect();
        assert_eq!(names, vec!["Top", "Upper", "Mid", "Low"]);
        for pair in result.sorted.windows(2) {
            assert!(pair[0].card.overall >= pair[1].card.overall);
        }
    }

    #[test]
    fn ties_share_the_count_of_tied_or_better() {
        let records = vec![
            manager("A", 20.0, 10.0, 30.0, 20.0),
            manager("B", 20.0, 10.0, 30.0, 20.0),
            manager("C", 20.0, 15.0, 40.0, 10.0),
        ];
        assert_eq!(ranking(&records, "C").expect("rank").rank, 1);
        assert_eq!(ranking(&records, "A").expect("rank").rank, 3);
        assert_eq!(ranking(&records, "B").expect("rank").rank, 3);
    }

    #[test]
    fn caller_table_is_not_reordered() {
        let records = league();
        let before = records.clone();
        let _ = ranking(&records, "Low").expect("rank");
        assert_eq!(records, before);
    }

    #[test]
    fn unknown_manager_is_not_found() {
        let err = ranking(&league(), "Nobody").expect_err("missing manager should fail");
        assert!(matches!(err, DashError::NotFound { ref key, .. } if key == "Nobody"));
    }
}
