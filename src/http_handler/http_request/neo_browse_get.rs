use super::neo_browse::NeoBrowseResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

#[derive(Debug)]
pub struct NeoBrowseRequest {
    pub api_key: String,
}

impl NoBodyHTTPRequestType for NeoBrowseRequest {}

impl HTTPRequestType for NeoBrowseRequest {
    type Response = NeoBrowseResponse;
    fn endpoint(&self) -> &'static str {
        "/neo/rest/v1/neo/browse"
    }
    fn request_method(&self) -> HTTPRequestMethod {
        HTTPRequestMethod::Get
    }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("api_key", self.api_key.clone())]
    }
}
