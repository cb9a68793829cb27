use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// One page of the NeoWs browse endpoint. Only the first returned page is
/// consumed; the `links`/`page` envelope is ignored.
#[derive(serde::Deserialize, Debug)]
pub struct NeoBrowseResponse {
    near_earth_objects: Vec<RawNeo>,
}

impl SerdeJSONBodyHTTPResponseType for NeoBrowseResponse {}

impl NeoBrowseResponse {
    pub fn near_earth_objects(&self) -> &[RawNeo] { &self.near_earth_objects }
}

/// A raw catalog entry as received, untouched by the shaping pipeline.
/// Diameter fields stay optional so one gutted entry cannot fail the
/// whole document.
#[derive(serde::Deserialize, Debug)]
pub struct RawNeo {
    id: String,
    name: String,
    estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

impl RawNeo {
    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn close_approach_data(&self) -> &[CloseApproach] { &self.close_approach_data }

    /// The kilometer-denominated diameter estimate, if the entry carries one.
    pub fn diameter_km(&self) -> Option<&DiameterRange> {
        self.estimated_diameter.as_ref().and_then(|d| d.kilometers.as_ref())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct EstimatedDiameter {
    kilometers: Option<DiameterRange>,
}

#[derive(serde::Deserialize, Debug)]
pub struct DiameterRange {
    estimated_diameter_min: Option<f64>,
    estimated_diameter_max: Option<f64>,
}

impl DiameterRange {
    pub fn min(&self) -> Option<f64> { self.estimated_diameter_min }
    pub fn max(&self) -> Option<f64> { self.estimated_diameter_max }
}

#[derive(serde::Deserialize, Debug)]
pub struct CloseApproach {
    close_approach_date: chrono::NaiveDate,
    orbiting_body: String,
}

impl CloseApproach {
    pub fn orbiting_body(&self) -> &str { &self.orbiting_body }
}
