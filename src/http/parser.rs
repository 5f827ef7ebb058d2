use crate::http::request::{Method, ParsedRequest};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Empty line or end of stream before a request line arrived
    EmptyRequest,
    /// Fewer than three whitespace-separated tokens
    MalformedRequestLine,
}

/// Parses the first line of a connection into a [`ParsedRequest`].
///
/// The target's query string (`?` and everything after it) is dropped; query
/// parameters never influence which file is served. One leading `/` is
/// stripped so the remainder joins cleanly onto the document root, and a
/// target of `/` (or nothing) is replaced with `default_page`.
///
/// The HTTP version token is not validated; any third token is accepted.
pub fn parse_request_line(line: &str, default_page: &str) -> Result<ParsedRequest, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(ParseError::EmptyRequest);
    }

    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedRequestLine);
    };

    let target = match target.split_once('?') {
        Some((before, _query)) => before,
        None => target,
    };
    let target = target.strip_prefix('/').unwrap_or(target);

    let path = if target.is_empty() {
        default_page.to_string()
    } else {
        target.to_string()
    };

    Ok(ParsedRequest {
        method: Method::from_token(method),
        path,
        version: version.to_string(),
    })
}
