use harbor::http::response::StatusCode;
use harbor::http::writer;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[tokio::test]
async fn test_write_success_exact_bytes() {
    let mut out = Vec::new();
    writer::write_success(&mut out, "text/html", b"hello")
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 5\r\n\r\nhello"
    );
}

#[tokio::test]
async fn test_write_success_empty_body() {
    let mut out = Vec::new();
    writer::write_success(&mut out, "application/octet-stream", b"")
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Content-Length: 0\r\n"));
    assert!(text.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_write_success_declared_length_matches_body() {
    let content = vec![0u8, 1, 2, 3, 4, 5, 6, 7];
    let mut out = Vec::new();
    writer::write_success(&mut out, "image", &content)
        .await
        .unwrap();

    let separator = out.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    let headers = String::from_utf8_lossy(&out[..separator]);
    let body = &out[separator + 4..];

    assert!(headers.contains(&format!("Content-Length: {}", content.len())));
    assert_eq!(body, content.as_slice());
}

#[tokio::test]
async fn test_write_head_has_headers_but_no_body() {
    let mut out = Vec::new();
    writer::write_head(&mut out, "image", 12345).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Content-Type: image\r\n"));
    assert!(text.contains("Content-Length: 12345\r\n"));
    // The response must end at the header/body separator
    assert!(text.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_write_error_embeds_code_and_phrase() {
    let mut out = Vec::new();
    writer::write_error(&mut out, StatusCode::NotFound)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("<html><body><h1>404 Not Found</h1></body></html>"));
}

#[tokio::test]
async fn test_write_error_for_each_status() {
    let statuses = vec![
        StatusCode::BadRequest,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
    ];

    for status in statuses {
        let mut out = Vec::new();
        writer::write_error(&mut out, status).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(&status.as_u16().to_string()));
        assert!(text.contains(status.reason_phrase()));
    }
}

#[tokio::test]
async fn test_write_trace_echoes_in_order() {
    let mut out = Vec::new();
    let headers = vec!["Host: x".to_string(), "User-Agent: test".to_string()];
    writer::write_trace(&mut out, "TRACE /foo HTTP/1.1", &headers)
        .await
        .unwrap();

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: message/http\r\n\r\nTRACE /foo HTTP/1.1\r\nHost: x\r\nUser-Agent: test\r\n"
    );
}

#[tokio::test]
async fn test_write_trace_without_headers() {
    let mut out = Vec::new();
    writer::write_trace(&mut out, "TRACE / HTTP/1.1", &[])
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("\r\n\r\nTRACE / HTTP/1.1\r\n"));
}
