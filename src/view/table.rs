use crate::neo::NeoRecord;

const NAME_HEADER: &str = "Name";
const MIN_HEADER: &str = "Min Diameter (km)";
const MAX_HEADER: &str = "Max Diameter (km)";
const BODIES_HEADER: &str = "Orbiting Bodies";

/// Renders the visible records as a numbered table. Diameter bounds are
/// rounded to two decimals here, at display time only.
pub fn render_table(records: &[&NeoRecord]) -> String {
    if records.is_empty() {
        return String::from("no data available\n");
    }
    let name_width = records
        .iter()
        .map(|record| record.name().len())
        .chain([NAME_HEADER.len()])
        .max()
        .unwrap_or(NAME_HEADER.len());
    // one extra column for the dot after the row number
    let index_width = records.len().to_string().len() + 1;

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!(
        "{:>index_width$} {NAME_HEADER:<name_width$}  {MIN_HEADER}  {MAX_HEADER}  {BODIES_HEADER}",
        ""
    ));
    for (i, record) in records.iter().enumerate() {
        let number = format!("{}.", i + 1);
        lines.push(format!(
            "{number:>index_width$} {:<name_width$}  {:>min_width$.2}  {:>max_width$.2}  {}",
            record.name(),
            record.min_diameter(),
            record.max_diameter(),
            record.orbiting_bodies().join(", "),
            min_width = MIN_HEADER.len(),
            max_width = MAX_HEADER.len(),
        ));
    }
    lines.join("\n") + "\n"
}
