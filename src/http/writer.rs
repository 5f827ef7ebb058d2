use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

fn status_line(status: StatusCode) -> String {
    format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    )
}

async fn write_all_flush<W>(out: &mut W, buf: &[u8]) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(buf).await?;
    out.flush().await?;
    Ok(())
}

/// Writes a complete 200 response: status line, `Content-Type`,
/// `Content-Length`, blank line, then the file content.
///
/// The declared length is taken from `content` itself, so it always matches
/// the bytes written.
pub async fn write_success<W>(out: &mut W, category: &str, content: &[u8]) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::with_capacity(content.len() + 128);
    buf.extend_from_slice(status_line(StatusCode::Ok).as_bytes());
    buf.extend_from_slice(format!("Content-Type: {}\r\n", category).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", content.len()).as_bytes());
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(content);

    write_all_flush(out, &buf).await
}

/// Writes the headers of a 200 response without any body bytes.
///
/// `len` is the size of the file the headers describe; a HEAD response must
/// carry the same `Content-Length` a GET would, and never the content itself.
pub async fn write_head<W>(out: &mut W, category: &str, len: u64) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::with_capacity(128);
    buf.extend_from_slice(status_line(StatusCode::Ok).as_bytes());
    buf.extend_from_slice(format!("Content-Type: {}\r\n", category).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", len).as_bytes());
    buf.extend_from_slice(b"\r\n");

    write_all_flush(out, &buf).await
}

/// Writes an error response with a minimal HTML body naming the status.
pub async fn write_error<W>(out: &mut W, status: StatusCode) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let body = format!(
        "<html><body><h1>{} {}</h1></body></html>",
        status.as_u16(),
        status.reason_phrase()
    );

    let mut buf = Vec::with_capacity(body.len() + 64);
    buf.extend_from_slice(status_line(status).as_bytes());
    buf.extend_from_slice(b"Content-Type: text/html\r\n");
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(body.as_bytes());

    write_all_flush(out, &buf).await
}

/// Writes a TRACE response echoing the request line and header lines.
///
/// The echo covers request metadata only, in the order it arrived; the body
/// of the inbound request is never reflected.
pub async fn write_trace<W>(
    out: &mut W,
    request_line: &str,
    header_lines: &[String],
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::with_capacity(256);
    buf.extend_from_slice(status_line(StatusCode::Ok).as_bytes());
    buf.extend_from_slice(b"Content-Type: message/http\r\n");
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(request_line.as_bytes());
    buf.extend_from_slice(b"\r\n");
    for line in header_lines {
        buf.extend_from_slice(line.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    write_all_flush(out, &buf).await
}
