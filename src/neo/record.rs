use crate::http_handler::http_response::neo_browse::RawNeo;
use itertools::Itertools;
use strum_macros::Display;

/// A flattened catalog entry: one near-Earth object with its estimated
/// diameter bounds in kilometers and the distinct celestial bodies its
/// close approaches are relative to.
///
/// Built once per raw entry during a load cycle and immutable thereafter.
/// Diameters are carried verbatim; rounding is left to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct NeoRecord {
    name: String,
    min_diameter: f64,
    max_diameter: f64,
    /// Deduplicated, first occurrence order.
    orbiting_bodies: Vec<String>,
}

impl NeoRecord {
    pub fn new(name: &str, min_diameter: f64, max_diameter: f64, orbiting_bodies: Vec<String>) -> Self {
        Self {
            name: String::from(name),
            min_diameter,
            max_diameter,
            orbiting_bodies,
        }
    }

    /// Flattens one raw entry. The kilometer diameter bounds are required;
    /// an entry without them (or with unusable ones) is malformed and left
    /// to the caller's skip policy. An entry with no close approaches is
    /// valid and yields an empty body list.
    pub fn from_raw(raw: &RawNeo) -> Result<NeoRecord, MalformedRecordError> {
        let diameter = raw.diameter_km().ok_or(MalformedRecordError::MissingDiameter)?;
        let min_diameter = diameter.min().ok_or(MalformedRecordError::MissingDiameterBound)?;
        let max_diameter = diameter.max().ok_or(MalformedRecordError::MissingDiameterBound)?;
        if !min_diameter.is_finite()
            || !max_diameter.is_finite()
            || min_diameter < 0.0
            || max_diameter < min_diameter
        {
            return Err(MalformedRecordError::InvalidDiameterBounds);
        }
        let orbiting_bodies = raw
            .close_approach_data()
            .iter()
            .map(|approach| approach.orbiting_body())
            .unique()
            .map(String::from)
            .collect();
        Ok(NeoRecord::new(raw.name(), min_diameter, max_diameter, orbiting_bodies))
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn min_diameter(&self) -> f64 { self.min_diameter }
    pub fn max_diameter(&self) -> f64 { self.max_diameter }
    pub fn orbiting_bodies(&self) -> &[String] { &self.orbiting_bodies }
    pub fn average_diameter(&self) -> f64 { (self.min_diameter + self.max_diameter) / 2.0 }
}

#[derive(Debug, Display)]
pub enum MalformedRecordError {
    MissingDiameter,
    MissingDiameterBound,
    InvalidDiameterBounds,
}

impl std::error::Error for MalformedRecordError {}
