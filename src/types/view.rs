//! Presentation-neutral view model.
//!
//! Figures serialize to the JSON shape Plotly accepts (`{data, layout}`), so a
//! browser adapter can hand them to `Plotly.react` unchanged.

use serde::Serialize;

pub const DARK_TEMPLATE: &str = "plotly_dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardKind {
    Analyst,
    Player,
    Manager,
}

impl DashboardKind {
    pub const ALL: [DashboardKind; 3] = [Self::Analyst, Self::Player, Self::Manager];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analyst => "analyst",
            Self::Player => "player",
            Self::Manager => "manager",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Analyst => "Performance Analyst Dashboard",
            Self::Player => "laliga Player Statistics",
            Self::Manager => "La Liga Coach Statistics Dashboard",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub dashboard: DashboardKind,
    pub title: String,
    pub selection: String,
    pub sections: Vec<TextSection>,
    pub charts: Vec<NamedChart>,
}

impl ViewModel {
    pub fn new(dashboard: DashboardKind, selection: &str) -> Self {
        Self {
            dashboard,
            title: dashboard.title().to_string(),
            selection: selection.to_string(),
            sections: Vec::new(),
            charts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl ViewModel {
    pub fn section(&self, id: &str) -> Option<&TextSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn chart(&self, id: &str) -> Option<&Figure> {
        self.charts
            .iter()
            .find(|chart| chart.id == id)
            .map(|chart| &chart.figure)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextSection {
    pub id: String,
    pub lines: Vec<String>,
}

impl TextSection {
    pub fn new(id: &str, lines: Vec<String>) -> Self {
        Self {
            id: id.to_string(),
            lines,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedChart {
    pub id: String,
    pub figure: Figure,
}

impl NamedChart {
    pub fn new(id: &str, figure: Figure) -> Self {
        Self {
            id: id.to_string(),
            figure,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn titled(title: &str) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::titled(title),
        }
    }

    /// An empty dark figure, used when there is nothing to plot.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::default(),
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn with_layout(mut self, edit: impl FnOnce(&mut Layout)) -> Self {
        edit(&mut self.layout);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        x: Series,
        y: Series,
        #[serde(skip_serializing_if = "Option::is_none")]
        orientation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
    Indicator {
        mode: String,
        value: f64,
        title: Title,
        #[serde(skip_serializing_if = "Option::is_none")]
        domain: Option<Domain>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gauge: Option<Gauge>,
    },
    Scatter {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        mode: String,
        x: Vec<f64>,
        y: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
}

impl Trace {
    pub fn bar(x: Series, y: Series) -> Self {
        Self::Bar {
            name: None,
            x,
            y,
            orientation: None,
            marker: None,
        }
    }

    pub fn named_bar(name: &str, x: Series, y: Series, color: Option<&str>) -> Self {
        Self::Bar {
            name: Some(name.to_string()),
            x,
            y,
            orientation: None,
            marker: color.map(Marker::color),
        }
    }

    pub fn pie(labels: &[&str], values: Vec<f64>) -> Self {
        Self::Pie {
            labels: labels.iter().map(|label| label.to_string()).collect(),
            values,
            marker: None,
        }
    }

    pub fn number(value: f64, title: String, column: usize) -> Self {
        Self::Indicator {
            mode: "number".to_string(),
            value,
            title: Title::plain(title),
            domain: Some(Domain { row: 0, column }),
            gauge: None,
        }
    }

    pub fn gauge(value: f64, title: Title, gauge: Gauge) -> Self {
        Self::Indicator {
            mode: "gauge+number".to_string(),
            value,
            title,
            domain: None,
            gauge: Some(gauge),
        }
    }

    pub fn markers(name: Option<&str>, x: Vec<f64>, y: Vec<f64>, marker: Marker) -> Self {
        Self::Scatter {
            name: name.map(str::to_string),
            mode: "markers".to_string(),
            x,
            y,
            text: None,
            marker: Some(marker),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Labels(Vec<String>),
    Numbers(Vec<f64>),
}

impl Series {
    pub fn labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::Labels(labels.iter().map(|l| l.as_ref().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Labels(values) => values.len(),
            Self::Numbers(values) => values.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<MarkerSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

impl Marker {
    pub fn color(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gauge {
    pub axis: GaugeAxis,
    pub bar: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<GaugeStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeAxis {
    pub range: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub range: [f64; 2],
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: None,
            template: DARK_TEMPLATE.to_string(),
            barmode: None,
            grid: None,
            showlegend: None,
            xaxis: None,
            yaxis: None,
            paper_bgcolor: None,
            height: None,
        }
    }
}

impl Layout {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(Title::plain(title)),
            ..Self::default()
        }
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_ref().map(|title| title.text.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub showgrid: bool,
    pub zeroline: bool,
}
