use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, FetchError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, FetchError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, FetchError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        if response.status().is_success() {
            Ok(response)
        } else if response.status().is_server_error() {
            Err(FetchError::InternalServer)
        } else if response.status().is_client_error() {
            Err(FetchError::BadRequest(response.json().await?))
        } else {
            Err(FetchError::Unknown)
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorReturn {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    code: String,
    message: String,
}

/// Failure modes of one catalog fetch. Recovered at the load boundary,
/// never propagated into rendering.
#[derive(Debug, Display)]
pub enum FetchError {
    InternalServer,
    BadRequest(ApiErrorReturn),
    NoConnection,
    Unknown,
}

impl std::error::Error for FetchError {}
impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() || value.is_redirect() {
            FetchError::InternalServer
        } else if value.is_connect() {
            FetchError::NoConnection
        } else {
            FetchError::Unknown
        }
    }
}
