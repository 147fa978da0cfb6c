use super::fmt_num;
use crate::error::{DashError, Result};
use crate::load::table::Table;
use crate::metrics::player::{goals_per_match, parse_position, pass_success_rate, performance_score};
use crate::types::record::PlayerRecord;
use crate::types::view::{
    AxisLayout, DashboardKind, Figure, Marker, MarkerSize, NamedChart, Series, TextSection, Title,
    Trace, ViewModel,
};

pub fn build(key: &str, table: &Table<PlayerRecord>) -> Result<ViewModel> {
    let player = table.first(key).ok_or_else(|| DashError::NotFound {
        dashboard: DashboardKind::Player.as_str().to_string(),
        key: key.to_string(),
    })?;

    let goals_per_match = goals_per_match(player)?;
    let pass_rate = pass_success_rate(player)?;
    let score = performance_score(player.goals, pass_rate, player.minutes_played);

    let mut view = ViewModel::new(DashboardKind::Player, key);
    view.sections.push(TextSection::new(
        "player-data",
        vec![
            format!("Player: {}", player.name),
            format!("Team: {}", player.team),
            format!("Minutes Played: {}", fmt_num(player.minutes_played)),
            format!("Matches: {}", fmt_num(player.matches)),
            format!("Goals: {}", fmt_num(player.goals)),
            format!("Total Passes: {}", fmt_num(player.total_passes)),
            format!("Successful Passes: {}", fmt_num(player.successful_passes)),
        ],
    ));

    view.charts = vec![
        NamedChart::new(
            "goals-per-match-graph",
            Figure::titled("Goals per Match").with_trace(Trace::bar(
                Series::labels(&["Goals per Match"]),
                Series::Numbers(vec![goals_per_match]),
            )),
        ),
        NamedChart::new(
            "pass-success-rate-graph",
            Figure::titled("Pass Success Rate").with_trace(Trace::pie(
                &["Successful Passes", "Unsuccessful Passes"],
                vec![
                    player.successful_passes,
                    player.total_passes - player.successful_passes,
                ],
            )),
        ),
        NamedChart::new("player-performance-graph", performance_chart(player, score)),
        NamedChart::new("pass-heatmap-graph", heatmap(&table.matching(key))),
    ];
    Ok(view)
}

fn performance_chart(player: &PlayerRecord, score: f64) -> Figure {
    let trace = Trace::Scatter {
        name: None,
        mode: "markers".to_string(),
        x: vec![player.minutes_played],
        y: vec![score],
        text: Some(vec![player.name.clone()]),
        marker: Some(Marker {
            size: Some(MarkerSize::PerPoint(vec![player.goals])),
            ..Marker::default()
        }),
    };
    Figure::titled("Player Performance")
        .with_trace(trace)
        .with_layout(|layout| {
            layout.xaxis = Some(axis(Some("Minutes Played"), true));
            layout.yaxis = Some(axis(Some("Performance Score"), true));
        })
}

/// Pass start and end points over every row recorded for the player.
fn heatmap(rows: &[&PlayerRecord]) -> Figure {
    let (start_x, start_y) = positions(rows, |row| row.pass_start.as_deref());
    let (end_x, end_y) = positions(rows, |row| row.pass_end.as_deref());

    let marker = |color: &str| Marker {
        color: Some(color.to_string()),
        size: Some(MarkerSize::Fixed(5.0)),
        opacity: Some(0.5),
        ..Marker::default()
    };

    Figure::titled("Heatmap of Player Passes")
        .with_trace(Trace::markers(Some("Pass Start"), start_x, start_y, marker("blue")))
        .with_trace(Trace::markers(Some("Pass End"), end_x, end_y, marker("red")))
        .with_layout(|layout| {
            layout.xaxis = Some(axis(Some("Field X"), false));
            layout.yaxis = Some(axis(Some("Field Y"), false));
            layout.showlegend = Some(true);
        })
}

fn positions<'a>(
    rows: &[&'a PlayerRecord],
    field: impl Fn(&'a PlayerRecord) -> Option<&'a str>,
) -> (Vec<f64>, Vec<f64>) {
    rows.iter()
        .filter_map(|row| field(*row).and_then(parse_position))
        .unzip()
}

fn axis(title: Option<&str>, grid: bool) -> AxisLayout {
    AxisLayout {
        title: title.map(Title::plain),
        showgrid: grid,
        zeroline: grid,
    }
}
