use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::files::{guard, FileReadOutcome};
use crate::http::parser::{parse_request_line, ParseError};
use crate::http::request::{Method, Request};
use crate::http::resolver::{self, MimeResolution};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::server::Site;

/// Size of the single read that must hold the request line.
pub const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingRequest,
    Parsed(BytesMut),
    MethodChecked(Request),
    Resolved(Request, MimeResolution),
    Guarded(Method, MimeResolution),
    Read(Method, MimeResolution, FileReadOutcome),
    Responded(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::AwaitingRequest,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// A failed or empty first read closes without a response. An `Err` means
    /// the exchange was abandoned part way: the response write failed, or the
    /// file could not be read for a reason other than permissions or absence,
    /// in which case nothing was sent.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitingRequest => self.read_request().await,

                ConnectionState::Parsed(buf) => match parse_request_line(&buf) {
                    Ok(req) => {
                        tracing::info!(
                            host = req.host_or_dash(),
                            method = %req.method,
                            path = %req.raw_path,
                            "Request received"
                        );
                        ConnectionState::MethodChecked(req)
                    }
                    Err(ParseError::Empty) => ConnectionState::Closed,
                    Err(ParseError::MethodNotAllowed) => {
                        tracing::warn!("Method not allowed");
                        Self::respond(Response::status_only(StatusCode::MethodNotAllowed), "")
                    }
                },

                ConnectionState::MethodChecked(req) => {
                    let resolution = resolver::resolve(&req.raw_path);
                    ConnectionState::Resolved(req, resolution)
                }

                // Raw path, before any media-type decision.
                ConnectionState::Resolved(req, resolution) => {
                    if guard::is_contained(self.site.files.document_root(), &req.raw_path) {
                        ConnectionState::Guarded(req.method, resolution)
                    } else {
                        tracing::warn!(path = %req.raw_path, "Path escapes document root");
                        Self::respond(Response::status_only(StatusCode::Forbidden), "")
                    }
                }

                ConnectionState::Guarded(method, resolution) => {
                    if resolution.is_supported() {
                        let outcome = self.site.files.read(&resolution.file_name).await;
                        ConnectionState::Read(method, resolution, outcome)
                    } else {
                        Self::respond(Response::status_only(StatusCode::UnsupportedMediaType), "")
                    }
                }

                ConnectionState::Read(method, resolution, outcome) => {
                    match Response::for_file(
                        method,
                        resolution.mime_type,
                        outcome,
                        &self.site.server_name,
                    ) {
                        Some(response) => Self::respond(response, resolution.mime_type),
                        None => {
                            return Err(anyhow::anyhow!(
                                "failed to read {}, closing without a response",
                                resolution.file_name
                            ));
                        }
                    }
                }

                ConnectionState::Responded(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // Peer may already be gone; the response is out either way.
                    let _ = self.stream.shutdown().await;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    async fn read_request(&mut self) -> ConnectionState {
        let mut buf = BytesMut::with_capacity(READ_BUFFER_SIZE);

        match self.stream.read_buf(&mut buf).await {
            Ok(0) => {
                tracing::warn!("Empty request, closing");
                ConnectionState::Closed
            }
            Ok(_) => ConnectionState::Parsed(buf),
            Err(e) => {
                tracing::debug!(error = %e, "Read failed, closing");
                ConnectionState::Closed
            }
        }
    }

    fn respond(response: Response, mime_type: &str) -> ConnectionState {
        tracing::info!(
            status = response.status.as_u16(),
            mime = mime_type,
            bytes = response.header("Content-Length").unwrap_or("0"),
            "Response dispatched"
        );

        ConnectionState::Responded(ResponseWriter::new(&response))
    }
}
