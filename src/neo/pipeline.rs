use super::record::NeoRecord;
use super::selection::Selection;
use crate::http_handler::http_response::neo_browse::RawNeo;
use crate::warn;
use itertools::Itertools;

/// Flattens raw catalog entries into records, skipping malformed ones.
/// Returns the records in input order together with the skip count.
pub fn normalize(raw: &[RawNeo]) -> (Vec<NeoRecord>, usize) {
    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for entry in raw {
        match NeoRecord::from_raw(entry) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!("Skipping malformed catalog entry {} (id {}): {err}", entry.name(), entry.id());
                skipped += 1;
            }
        }
    }
    (records, skipped)
}

/// The distinct orbiting bodies across `records`, in first-seen order.
pub fn extract_vocabulary(records: &[NeoRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.orbiting_bodies().iter())
        .unique()
        .cloned()
        .collect()
}

/// Orders records by descending average of the two diameter bounds.
/// The sort is stable: records with equal averages keep their input order,
/// and re-sorting an already sorted sequence is a no-op.
pub fn sort_by_average_diameter_desc(mut records: Vec<NeoRecord>) -> Vec<NeoRecord> {
    records.sort_by(|a, b| b.average_diameter().total_cmp(&a.average_diameter()));
    records
}

/// Projects the records visible under `selection`, preserving order.
/// An empty selection keeps every record; otherwise a record stays visible
/// when its body list intersects the selection.
pub fn apply_filter<'a>(records: &'a [NeoRecord], selection: &Selection) -> Vec<&'a NeoRecord> {
    if selection.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record.orbiting_bodies().iter().any(|body| selection.contains(body)))
        .collect()
}
