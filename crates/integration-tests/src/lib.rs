//! Integration tests for the Tienda client suite.
//!
//! The tests in `tests/` run the real clients against [`StubServer`],
//! a minimal in-process HTTP server speaking just enough HTTP/1.1 for
//! one request per connection. No network beyond loopback, no
//! external services.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A canned response for one route.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    /// A 200 response with the given JSON body.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A response with an explicit status and JSON body.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path without the query string.
    pub path: String,
    /// Header names lowercased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

type Routes = HashMap<String, StubResponse>;

/// In-process HTTP server returning canned responses by
/// `"METHOD /path"` and recording every request it serves.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Bind to an ephemeral loopback port and start serving.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; tests have no use for
    /// a server that failed to start.
    pub async fn start(routes: impl IntoIterator<Item = (&str, StubResponse)>) -> Self {
        let routes: Routes = routes
            .into_iter()
            .map(|(key, response)| (key.to_string(), response))
            .collect();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        #[allow(clippy::unwrap_used)]
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        #[allow(clippy::unwrap_used)]
        let addr = listener.local_addr().unwrap();

        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = serve_one(stream, &routes, &recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Base URL to point a client at.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every request served so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The recorded requests matching `method` and `path`.
    #[must_use]
    pub fn requests_for(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn serve_one(
    mut stream: TcpStream,
    routes: &Routes,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let request = match read_request(&mut stream).await? {
        Some(request) => request,
        None => return Ok(()),
    };

    let key = format!("{} {}", request.method, request.path);
    let response = routes.get(&key).cloned().unwrap_or_else(|| {
        StubResponse::status(
            404,
            format!(
                r#"{{"success":false,"path":"{}","data":null,"error":{{"code":"NOT_FOUND","message":"no stub for {key}","status":404}}}}"#,
                request.path
            ),
        )
    });

    recorded
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(request);

    let reply = format!(
        "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    stream.write_all(reply.as_bytes()).await?;
    stream.shutdown().await
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<RecordedRequest>> {
    let mut buf = Vec::new();
    let header_end = loop {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(None);
        }
        buf.extend_from_slice(chunk.get(..n).unwrap_or_default());
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(buf.get(..header_end).unwrap_or_default()).into_owned();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default();
    let path = target.split('?').next().unwrap_or_default().to_string();

    let mut headers = HashMap::new();
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    let mut body: Vec<u8> = buf.get(body_start..).unwrap_or_default().to_vec();
    while body.len() < content_length {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..n).unwrap_or_default());
    }

    Ok(Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// A structurally valid token whose `exp` lies `exp_offset_secs` away
/// from now (negative for already-expired).
#[must_use]
pub fn test_token(subject: &str, exp_offset_secs: i64) -> String {
    #[allow(clippy::unwrap_used)]
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::json!({"sub": subject, "exp": now + exp_offset_secs}).to_string(),
    );
    format!("{header}.{payload}.sig")
}

/// A success envelope around `data`.
#[must_use]
pub fn envelope(path: &str, data: serde_json::Value) -> String {
    serde_json::json!({
        "success": true,
        "path": path,
        "data": data,
        "error": null,
        "timestamp": "2024-03-01T10:00:00Z"
    })
    .to_string()
}

/// An error envelope with the given code and status.
#[must_use]
pub fn error_envelope(path: &str, code: &str, status: u16) -> String {
    serde_json::json!({
        "success": false,
        "path": path,
        "data": null,
        "error": {"code": code, "message": code.to_lowercase().replace('_', " "), "status": status},
        "timestamp": "2024-03-01T10:00:00Z"
    })
    .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_end() {
        // offset of the blank line, not of the body
        assert_eq!(find_header_end(b"GET / HTTP/1.1\r\n\r\nbody"), Some(14));
        assert_eq!(find_header_end(b"GET / HTTP/1.1\r\n"), None);
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = test_token("ana@example.com", 3600);
        assert_eq!(token.split('.').count(), 3);
    }
}
