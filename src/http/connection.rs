use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::config::StaticFilesConfig;
use crate::files::resolve::{self, ResolveError};
use crate::http::mime;
use crate::http::parser;
use crate::http::request::{Method, ParsedRequest};
use crate::http::response::StatusCode;
use crate::http::writer;

pub struct Connection {
    stream: TcpStream,
    config: StaticFilesConfig,
}

enum ConnectionState {
    AwaitingRequestLine,
    Dispatching {
        request: ParsedRequest,
        raw_line: String,
    },
    Erroring(StatusCode),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, config: StaticFilesConfig) -> Self {
        Self { stream, config }
    }

    /// Handles one request and closes the connection.
    ///
    /// The shutdown runs on every exit path, including handler errors, so the
    /// socket is released exactly once per connection.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.handle().await;

        if let Err(e) = self.stream.shutdown().await {
            debug!("Shutdown after response failed: {}", e);
        }

        result
    }

    async fn handle(&mut self) -> anyhow::Result<()> {
        let (read_half, mut write_half) = self.stream.split();
        let mut reader = BufReader::new(read_half);
        let mut state = ConnectionState::AwaitingRequestLine;

        loop {
            state = match state {
                ConnectionState::AwaitingRequestLine => {
                    let mut line = String::new();
                    match reader.read_line(&mut line).await {
                        // Client closed before sending a request line
                        Ok(0) => ConnectionState::Erroring(StatusCode::BadRequest),
                        Ok(_) => {
                            let raw_line = line.trim_end_matches(['\r', '\n']).to_string();
                            info!("Request: {}", raw_line);

                            match parser::parse_request_line(&line, &self.config.default_page) {
                                Ok(request) => ConnectionState::Dispatching { request, raw_line },
                                Err(e) => {
                                    debug!("Rejecting request line: {:?}", e);
                                    ConnectionState::Erroring(StatusCode::BadRequest)
                                }
                            }
                        }
                        Err(e) => {
                            // Nothing has been written yet, so a 500 is still possible
                            warn!("Failed to read request line: {}", e);
                            ConnectionState::Erroring(StatusCode::InternalServerError)
                        }
                    }
                }

                ConnectionState::Dispatching { request, raw_line } => match request.method {
                    Method::Get => {
                        serve_file(&self.config, &request.path, false, &mut write_half).await?;
                        ConnectionState::Closed
                    }
                    Method::Head => {
                        serve_file(&self.config, &request.path, true, &mut write_half).await?;
                        ConnectionState::Closed
                    }
                    // POST is file retrieval here; any request body is ignored
                    Method::Post => {
                        serve_file(&self.config, &request.path, false, &mut write_half).await?;
                        ConnectionState::Closed
                    }
                    Method::Trace => {
                        echo_trace(&raw_line, &mut reader, &mut write_half).await?;
                        ConnectionState::Closed
                    }
                    Method::Unsupported => ConnectionState::Erroring(StatusCode::NotImplemented),
                },

                ConnectionState::Erroring(status) => {
                    if let Err(e) = writer::write_error(&mut write_half, status).await {
                        warn!("Failed to send {} response: {}", status.as_u16(), e);
                    }
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }
}

/// Resolves `path` under the document root and writes the response.
///
/// The file is read fully before any header goes out, so the declared
/// `Content-Length` always matches the body and a read failure can still
/// produce a clean 500.
async fn serve_file<W>(
    cfg: &StaticFilesConfig,
    path: &str,
    head_only: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let file = match resolve::resolve(&cfg.root, path).await {
        Ok(file) => file,
        Err(ResolveError::Forbidden) => {
            return writer::write_error(out, StatusCode::Forbidden).await;
        }
        Err(ResolveError::NotFound) => {
            return writer::write_error(out, StatusCode::NotFound).await;
        }
        Err(ResolveError::Internal) => {
            return writer::write_error(out, StatusCode::InternalServerError).await;
        }
    };

    debug!("Resolved to {}", file.display());
    let category = mime::classify(mime::probe(&file));

    if head_only {
        match fs::metadata(&file).await {
            Ok(meta) => writer::write_head(out, category, meta.len()).await,
            Err(e) => {
                warn!("Failed to stat {}: {}", file.display(), e);
                writer::write_error(out, StatusCode::InternalServerError).await
            }
        }
    } else {
        match fs::read(&file).await {
            Ok(content) => writer::write_success(out, category, &content).await,
            Err(e) => {
                warn!("Failed to read {}: {}", file.display(), e);
                writer::write_error(out, StatusCode::InternalServerError).await
            }
        }
    }
}

/// Reads the remaining header lines up to the first blank line and echoes
/// them back after the request line. TRACE never resolves a path.
async fn echo_trace<R, W>(request_line: &str, reader: &mut R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut header_lines = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.is_empty() {
            break;
        }
        header_lines.push(trimmed.to_string());
    }

    writer::write_trace(out, request_line, &header_lines).await
}
