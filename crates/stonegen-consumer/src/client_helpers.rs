//! Encoding and decoding around a single route call.

use crate::client_trait::{Endpoint, HttpClient, HttpRequest, HttpRequestResult, HttpResponse};
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Status the server uses for a route-level error
pub const ROUTE_ERROR_STATUS: u16 = 409;

/// Call a route whose result travels entirely as JSON.
pub fn request<T, E, P>(
    client: &dyn HttpClient,
    endpoint: Endpoint,
    function: &str,
    params: &P,
    body: Option<&[u8]>,
) -> Result<std::result::Result<T, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let response = send(client, endpoint, function, params, body.map(<[u8]>::to_vec), None, None)?;
    decode(response).map(|outcome| outcome.map(|r| r.result))
}

/// Call a route that sends or receives a raw body next to its JSON.
pub fn request_with_body<T, E, P>(
    client: &dyn HttpClient,
    endpoint: Endpoint,
    function: &str,
    params: &P,
    body: Option<Vec<u8>>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<std::result::Result<HttpRequestResult<T>, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let response = send(client, endpoint, function, params, body, range_start, range_end)?;
    decode(response)
}

fn send<P: Serialize + ?Sized>(
    client: &dyn HttpClient,
    endpoint: Endpoint,
    function: &str,
    params: &P,
    body: Option<Vec<u8>>,
    range_start: Option<u64>,
    range_end: Option<u64>,
) -> Result<HttpResponse> {
    let arg = serde_json::to_string(params)?;
    tracing::debug!(host = endpoint.host(), function, "sending request");

    client.execute(HttpRequest {
        endpoint,
        function: function.to_string(),
        arg,
        body,
        range_start,
        range_end,
    })
}

fn decode<T, E>(response: HttpResponse) -> Result<std::result::Result<HttpRequestResult<T>, E>>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    match response.status {
        200..=299 => Ok(Ok(HttpRequestResult {
            result: serde_json::from_str(&response.result)?,
            content_length: response.content_length,
            body: response.body,
        })),
        ROUTE_ERROR_STATUS => Ok(Err(serde_json::from_str(&response.result)?)),
        status => Err(Error::UnexpectedStatus {
            status,
            body: response.result,
        }),
    }
}
