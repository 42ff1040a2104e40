//! The transport seam generated route functions are written against.

/// Server a route is hosted on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Api,
    Content,
    Notify,
}

impl Endpoint {
    pub fn host(self) -> &'static str {
        match self {
            Endpoint::Api => "api",
            Endpoint::Content => "content",
            Endpoint::Notify => "notify",
        }
    }
}

/// One call as handed to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub endpoint: Endpoint,

    /// `<namespace>/<route>`
    pub function: String,

    /// JSON-encoded route argument
    pub arg: String,

    pub body: Option<Vec<u8>>,
    pub range_start: Option<u64>,
    pub range_end: Option<u64>,
}

/// What the client got back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,

    /// JSON-encoded route result, or route error when `status` is 409
    pub result: String,

    pub content_length: Option<u64>,
    pub body: Option<Vec<u8>>,
}

/// Executes calls against a server
pub trait HttpClient {
    fn execute(&self, request: HttpRequest) -> crate::Result<HttpResponse>;
}

/// Decoded result of a call that may carry a raw body
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequestResult<T> {
    pub result: T,
    pub content_length: Option<u64>,
    pub body: Option<Vec<u8>>,
}
