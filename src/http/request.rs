/// HTTP request methods.
///
/// Represents the HTTP method/verb of a request. The server implements GET,
/// HEAD, POST (treated as file retrieval), and TRACE; every other token maps
/// to `Unsupported` and is answered with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file under the document root
    Get,
    /// HEAD - Like GET but without the response body
    Head,
    /// POST - Answered exactly like GET; the request body is ignored
    Post,
    /// TRACE - Echo the request line and headers back to the client
    Trace,
    /// Any other method token
    Unsupported,
}

impl Method {
    /// Maps a method token to its handler variant.
    ///
    /// Unknown tokens are not an error at this layer; they dispatch to
    /// `Unsupported`, which the connection handler turns into a 501.
    ///
    /// # Example
    ///
    /// ```
    /// # use harbor::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("DELETE"), Method::Unsupported);
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "TRACE" => Method::Trace,
            _ => Method::Unsupported,
        }
    }
}

/// The parsed request line of one connection.
///
/// Produced once from the first line of input and immutable afterwards.
/// `path` has already had its query string dropped and its leading `/`
/// stripped, so it is always relative to the document root; an empty target
/// has already been replaced with the configured default page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The dispatched HTTP method
    pub method: Method,
    /// Request path relative to the document root
    pub path: String,
    /// HTTP version token, accepted as-is (see `parser`)
    pub version: String,
}
