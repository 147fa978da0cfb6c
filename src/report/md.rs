use crate::types::view::{Figure, Series, Trace, ViewModel};

pub fn to_markdown(view: &ViewModel) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", view.title));
    output.push_str(&format!("Selection: {}\n\n", view.selection));

    for section in &view.sections {
        output.push_str(&format!("## {}\n\n", section.id));
        for line in &section.lines {
            output.push_str(&format!("- {line}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Charts\n\n");
    for chart in &view.charts {
        let title = chart.figure.layout.title_text().unwrap_or(&chart.id);
        output.push_str(&format!("### {title}\n\n"));
        output.push_str(&describe(&chart.figure));
        output.push('\n');
    }

    output
}

fn describe(figure: &Figure) -> String {
    if figure.is_empty() {
        return "- no data\n".to_string();
    }
    let mut output = String::new();
    for trace in &figure.data {
        match trace {
            Trace::Bar { name, x, y, .. } => {
                let pairs = match (x, y) {
                    (Series::Labels(labels), Series::Numbers(values))
                    | (Series::Numbers(values), Series::Labels(labels)) => labels
                        .iter()
                        .zip(values)
                        .map(|(label, value)| format!("{label}={value:.3}"))
                        .collect::<Vec<_>>()
                        .join(", "),
                    _ => format!("{} points", x.len()),
                };
                match name {
                    Some(name) => output.push_str(&format!("- {name}: {pairs}\n")),
                    None => output.push_str(&format!("- {pairs}\n")),
                }
            }
            Trace::Pie { labels, values, .. } => {
                for (label, value) in labels.iter().zip(values) {
                    let label = if label.is_empty() { "other" } else { label.as_str() };
                    output.push_str(&format!("- {label}: {value:.3}\n"));
                }
            }
            Trace::Indicator { title, value, .. } => {
                output.push_str(&format!("- {}: {value:.3}\n", title.text));
            }
            Trace::Scatter { name, x, .. } => {
                let name = name.as_deref().unwrap_or("points");
                output.push_str(&format!("- {name}: {} points\n", x.len()));
            }
        }
    }
    output
}
