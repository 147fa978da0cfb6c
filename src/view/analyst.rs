use super::fmt_num;
use crate::load::AnalystData;
use crate::metrics::analyst::{attack_performance, defense_performance};
use crate::types::record::AnalystRecord;
use crate::types::view::{
    DashboardKind, Figure, Grid, NamedChart, Series, TextSection, Trace, ViewModel,
};

pub const NO_DATA: &str = "No data available for the selected analyst.";
pub const NO_FORMATION: &str = "No formation available";

const CHART_IDS: [&str; 6] = [
    "goals-chart",
    "pass-chart",
    "penalty-chart",
    "set-piece-chart",
    "attack-performance-chart",
    "defense-performance-chart",
];

/// Every row filed under the analyst is shown; an unknown analyst yields the
/// "no data" view rather than an error.
pub fn build(key: &str, data: &AnalystData) -> ViewModel {
    let rows = data.table.matching(key);
    let mut view = ViewModel::new(DashboardKind::Analyst, key);

    if rows.is_empty() {
        view.sections
            .push(TextSection::new("analyst-data", vec![NO_DATA.to_string()]));
        view.charts = CHART_IDS
            .iter()
            .map(|id| NamedChart::new(id, Figure::empty()))
            .collect();
        view.sections.push(TextSection::new(
            "preferred-formation",
            vec![NO_FORMATION.to_string()],
        ));
        return view;
    }

    view.sections
        .push(TextSection::new("analyst-data", team_stats(&rows)));
    view.charts = vec![
        NamedChart::new("goals-chart", goals_chart(&rows)),
        NamedChart::new("pass-chart", pass_chart(&rows)),
        NamedChart::new("penalty-chart", penalty_chart(&rows)),
        NamedChart::new("set-piece-chart", set_piece_chart(&rows)),
        NamedChart::new(
            "attack-performance-chart",
            rating_chart(&rows, "Attack", |row| attack_performance(row.goals_scored)),
        ),
        NamedChart::new(
            "defense-performance-chart",
            rating_chart(&rows, "Defense", |row| defense_performance(row.goals_conceded)),
        ),
    ];

    let formations = rows
        .iter()
        .map(|row| {
            let formation = data
                .formations
                .get(&row.team)
                .map(String::as_str)
                .unwrap_or(NO_FORMATION);
            format!("Preferred Formation for {}: {}", row.team, formation)
        })
        .collect();
    view.sections
        .push(TextSection::new("preferred-formation", formations));
    view
}

fn team_stats(rows: &[&AnalystRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    for row in rows {
        lines.extend([
            format!("Team: {}", row.team),
            format!("Goals Scored: {}", fmt_num(row.goals_scored)),
            format!("Goals Conceded: {}", fmt_num(row.goals_conceded)),
            format!("Top Scorer: {}", row.top_scorer),
            format!("Top Clean Sheet Keeper: {}", row.top_clean_sheet_keeper),
            format!("Passes Attempted: {}", fmt_num(row.passes_attempted)),
            format!("Passes Completed: {}", fmt_num(row.passes_completed)),
            format!("Set Piece Goals: {}", fmt_num(row.set_piece_goals)),
            format!("Penalties Awarded: {}", fmt_num(row.penalties_awarded)),
            format!("Penalty Goals: {}", fmt_num(row.penalty_goals)),
        ]);
    }
    for row in rows {
        lines.push(format!(
            "Attack Performance Rating for {}: {:.2} / 10",
            row.team,
            attack_performance(row.goals_scored)
        ));
    }
    for row in rows {
        lines.push(format!(
            "Defense Performance Rating for {}: {:.2} / 10",
            row.team,
            defense_performance(row.goals_conceded)
        ));
    }
    lines
}

fn sum(rows: &[&AnalystRecord], field: impl Fn(&AnalystRecord) -> f64) -> f64 {
    rows.iter().map(|row| field(row)).sum()
}

fn goals_chart(rows: &[&AnalystRecord]) -> Figure {
    let teams: Vec<&str> = rows.iter().map(|row| row.team.as_str()).collect();
    let column = |field: fn(&AnalystRecord) -> f64| {
        Series::Numbers(rows.iter().map(|row| field(row)).collect())
    };
    Figure::titled("Goals Analysis")
        .with_trace(Trace::named_bar(
            "Goals Scored",
            Series::labels(&teams),
            column(|row| row.goals_scored),
            None,
        ))
        .with_trace(Trace::named_bar(
            "Goals Conceded",
            Series::labels(&teams),
            column(|row| row.goals_conceded),
            None,
        ))
        .with_layout(|layout| layout.barmode = Some("group".to_string()))
}

fn pass_chart(rows: &[&AnalystRecord]) -> Figure {
    let completed = sum(rows, |row| row.passes_completed);
    let attempted = sum(rows, |row| row.passes_attempted);
    Figure::titled("Pass Completion Rate").with_trace(Trace::pie(
        &["Passes Completed", "Passes Missed"],
        vec![completed, attempted - completed],
    ))
}

fn penalty_chart(rows: &[&AnalystRecord]) -> Figure {
    let scored = sum(rows, |row| row.penalty_goals);
    let awarded = sum(rows, |row| row.penalties_awarded);
    Figure::titled("Penalty Performance").with_trace(Trace::pie(
        &["Penalty Goals", "Missed Penalties"],
        vec![scored, awarded - scored],
    ))
}

fn set_piece_chart(rows: &[&AnalystRecord]) -> Figure {
    let set_piece = sum(rows, |row| row.set_piece_goals);
    let other = sum(rows, |row| row.goals_scored) - set_piece;
    Figure::titled("Set Piece Goals Analysis").with_trace(Trace::Bar {
        name: None,
        x: Series::Numbers(vec![set_piece, other]),
        y: Series::labels(&["Set Piece Goals", "Other Goals"]),
        orientation: Some("h".to_string()),
        marker: None,
    })
}

/// One number indicator per team, laid out side by side.
fn rating_chart(rows: &[&AnalystRecord], label: &str, rate: impl Fn(&AnalystRecord) -> f64) -> Figure {
    let figure = rows
        .iter()
        .enumerate()
        .fold(Figure::empty(), |figure, (column, row)| {
            figure.with_trace(Trace::number(
                rate(row),
                format!("{label} Performance for {}", row.team),
                column,
            ))
        });
    figure.with_layout(|layout| {
        layout.grid = Some(Grid {
            rows: 1,
            columns: rows.len(),
        })
    })
}
