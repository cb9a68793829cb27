use crate::neo::NeoRecord;

const BAR_WIDTH: usize = 60;
const MAX_BAR_COLOR: &str = "\x1b[34m";
const MIN_BAR_COLOR: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Renders the visible records as a horizontal bar chart: per record one
/// bar for the maximum estimated diameter and one for the minimum, scaled
/// against the largest visible maximum.
pub fn render_chart(records: &[&NeoRecord]) -> String {
    if records.is_empty() {
        return String::from("no data available\n");
    }
    let scale_max = records.iter().map(|record| record.max_diameter()).fold(0.0_f64, f64::max);
    let mut lines = Vec::with_capacity(records.len() * 3);
    for record in records {
        lines.push(String::from(record.name()));
        lines.push(bar("max", MAX_BAR_COLOR, record.max_diameter(), scale_max));
        lines.push(bar("min", MIN_BAR_COLOR, record.min_diameter(), scale_max));
    }
    lines.join("\n") + "\n"
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn bar(label: &str, color: &str, value: f64, scale_max: f64) -> String {
    let filled = if scale_max > 0.0 {
        ((value / scale_max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!("  {label} {color}{}{RESET} {value:.2} km", "█".repeat(filled))
}
