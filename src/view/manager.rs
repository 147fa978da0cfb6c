use super::fmt_num;
use crate::error::{DashError, Result};
use crate::load::table::Table;
use crate::metrics::manager::score_card;
use crate::metrics::ranking::ranking;
use crate::types::record::ManagerRecord;
use crate::types::scoring::{Ranking, ScoreCard};
use crate::types::view::{
    AxisLayout, DashboardKind, Figure, Font, Gauge, GaugeAxis, GaugeStep, Line, Marker,
    NamedChart, Series, TextSection, Title, Trace, ViewModel,
};

const ACCENT: &str = "#05ab92";
const PANEL: &str = "#1e1e1e";
const GAUGE_RANGE: [f64; 2] = [0.0, 10.0];

pub fn build(key: &str, table: &Table<ManagerRecord>) -> Result<ViewModel> {
    let manager = table.first(key).ok_or_else(|| DashError::NotFound {
        dashboard: DashboardKind::Manager.as_str().to_string(),
        key: key.to_string(),
    })?;
    let card = score_card(manager);
    let ranking = ranking(table.rows(), key)?;

    let mut view = ViewModel::new(DashboardKind::Manager, key);
    view.sections.push(TextSection::new(
        "coach-data",
        coach_stats(manager, &ranking),
    ));
    view.charts = vec![
        NamedChart::new("win-rate-graph", win_rate_chart(card.win_rate)),
        NamedChart::new("goals-per-match-graph", goals_per_match_chart(&card)),
        NamedChart::new("offensive-performance-graph", offensive_chart(card.offensive)),
        NamedChart::new("defensive-performance-graph", defensive_chart(card.defensive)),
        NamedChart::new(
            "overall-performance-graph",
            Figure::titled("Overall Performance").with_trace(Trace::bar(
                Series::labels(&["Overall Performance"]),
                Series::Numbers(vec![card.overall]),
            )),
        ),
        NamedChart::new("ranking-graph", ranking_chart(&ranking)),
    ];
    view.sections.push(TextSection::new(
        "preferred-formation",
        vec![
            format!("Goalkeeper: {}", manager.goalkeeper),
            format!("Defenders: {}", manager.defenders),
            format!("Midfielders: {}", manager.midfielders),
            format!("Forwards: {}", manager.forwards),
        ],
    ));
    Ok(view)
}

fn coach_stats(manager: &ManagerRecord, ranking: &Ranking) -> Vec<String> {
    vec![
        format!("Manager: {}", manager.manager),
        format!("Team: {}", manager.team),
        format!("Matches: {}", fmt_num(manager.matches)),
        format!("Wins: {}", fmt_num(manager.wins)),
        format!("Draws: {}", fmt_num(manager.draws)),
        format!("Losses: {}", fmt_num(manager.losses)),
        format!("Goals Scored: {}", fmt_num(manager.goals_scored)),
        format!("Goals Conceded: {}", fmt_num(manager.goals_conceded)),
        format!("Trophies: {}", manager.trophies),
        format!("Ranking: {} of {}", ranking.rank, ranking.sorted.len()),
    ]
}

fn win_rate_chart(win_rate: f64) -> Figure {
    let trace = Trace::Pie {
        labels: vec!["Win Rate".to_string(), String::new()],
        values: vec![win_rate, 100.0 - win_rate],
        marker: Some(Marker {
            colors: Some(vec![ACCENT.to_string(), PANEL.to_string()]),
            line: Some(Line {
                color: "#ffffff".to_string(),
                width: 2.0,
            }),
            ..Marker::default()
        }),
    };
    Figure::titled("Win Rate")
        .with_trace(trace)
        .with_layout(|layout| layout.showlegend = Some(false))
}

fn goals_per_match_chart(card: &ScoreCard) -> Figure {
    let x = || Series::labels(&["Goals per Match"]);
    Figure::titled("Goals per Match")
        .with_trace(Trace::named_bar(
            "Goals Scored per Match",
            x(),
            Series::Numbers(vec![card.goals_scored_per_match]),
            Some("green"),
        ))
        .with_trace(Trace::named_bar(
            "Goals Conceded per Match",
            x(),
            Series::Numbers(vec![card.goals_conceded_per_match]),
            Some("red"),
        ))
        .with_layout(|layout| layout.barmode = Some("group".to_string()))
}

fn offensive_chart(score: f64) -> Figure {
    let gauge = Gauge {
        axis: GaugeAxis { range: GAUGE_RANGE },
        bar: Marker::color(ACCENT),
        bgcolor: None,
        steps: Vec::new(),
    };
    Figure::empty()
        .with_trace(Trace::gauge(score, Title::plain("Offensive Performance"), gauge))
        .with_layout(|layout| layout.paper_bgcolor = Some(PANEL.to_string()))
}

fn defensive_chart(score: f64) -> Figure {
    let step = |from: f64, to: f64, color: &str| GaugeStep {
        range: [from, to],
        color: color.to_string(),
    };
    let gauge = Gauge {
        axis: GaugeAxis { range: GAUGE_RANGE },
        bar: Marker::color(ACCENT),
        bgcolor: Some(PANEL.to_string()),
        steps: vec![
            step(0.0, 4.0, "#ff6666"),
            step(4.0, 7.0, "#ffa64d"),
            step(7.0, 10.0, "#66ff66"),
        ],
    };
    let title = Title {
        text: "Defensive Performance".to_string(),
        font: Some(Font {
            color: "#ffffff".to_string(),
        }),
    };
    Figure::empty()
        .with_trace(Trace::gauge(score, title, gauge))
        .with_layout(|layout| layout.height = Some(300))
}

fn ranking_chart(ranking: &Ranking) -> Figure {
    let managers: Vec<&str> = ranking
        .sorted
        .iter()
        .map(|entry| entry.manager.as_str())
        .collect();
    let scores = ranking.sorted.iter().map(|entry| entry.card.overall).collect();
    let axis = |title: &str| AxisLayout {
        title: Some(Title::plain(title)),
        showgrid: true,
        zeroline: true,
    };
    Figure::titled("Coach Rankings")
        .with_trace(Trace::bar(Series::labels(&managers), Series::Numbers(scores)))
        .with_layout(|layout| {
            layout.xaxis = Some(axis("Manager"));
            layout.yaxis = Some(axis("Overall Score"));
        })
}
