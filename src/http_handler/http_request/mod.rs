use super::http_response::neo_browse;

pub mod neo_browse_get;
pub mod request_common;
