//! MIME type detection and classification.
//!
//! `probe` guesses a MIME type from a file extension; `classify` collapses it
//! onto the coarse categories this server actually advertises.

use std::path::Path;

/// Guesses a MIME type from the file extension, case-insensitively.
///
/// Returns `None` for unknown or missing extensions.
pub fn probe(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        "html" | "htm" => Some("text/html"),
        "txt" => Some("text/plain"),
        "css" => Some("text/css"),
        "js" => Some("text/javascript"),
        _ => None,
    }
}

/// Maps a probed MIME type onto the category sent in `Content-Type`.
///
/// Anything outside the fixed table, including an unknown type, is served as
/// `application/octet-stream`. Pure lookup, no I/O.
pub fn classify(probed: Option<&str>) -> &'static str {
    match probed {
        Some("image/jpeg" | "image/png" | "image/gif" | "image/bmp") => "image",
        Some("image/x-icon") => "icon",
        Some("text/html") => "text/html",
        _ => "application/octet-stream",
    }
}
