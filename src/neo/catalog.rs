use super::pipeline;
use super::record::NeoRecord;
use super::selection::Selection;
use crate::http_handler::http_response::neo_browse::NeoBrowseResponse;

/// The normalized, sorted record set and filter vocabulary of one load
/// cycle. Immutable once built; the next fetch replaces it wholesale.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<NeoRecord>,
    vocabulary: Vec<String>,
}

impl Catalog {
    /// Runs the shaping pipeline over one fetched catalog page. Returns the
    /// catalog and the number of entries skipped as malformed.
    pub fn from_response(response: &NeoBrowseResponse) -> (Catalog, usize) {
        let (unsorted, skipped) = pipeline::normalize(response.near_earth_objects());
        let vocabulary = pipeline::extract_vocabulary(&unsorted);
        let records = pipeline::sort_by_average_diameter_desc(unsorted);
        (Catalog { records, vocabulary }, skipped)
    }

    pub fn records(&self) -> &[NeoRecord] { &self.records }
    pub fn vocabulary(&self) -> &[String] { &self.vocabulary }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// The records visible under `selection`, recomputed on every call.
    pub fn visible(&self, selection: &Selection) -> Vec<&NeoRecord> {
        pipeline::apply_filter(&self.records, selection)
    }
}
