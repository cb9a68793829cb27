use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{FetchError, HTTPResponseType};

pub(crate) enum HTTPRequestMethod {
    Get,
}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Sends this request against `client`'s base URL and parses the response.
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, FetchError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request_builder = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
        };
        let response = request_builder.query(&self.query_params()).send().await?;
        Self::Response::read_response(response).await
    }
}
