//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.
//! Requests are served one at a time, each running its probes synchronously.

use std::io::{Cursor, Read};

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use diagpage::api::{self, ApiContext, ApiError, ApiResponse, MaskRequest};
use diagpage::render;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";
const CSS: &str = "text/css; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// Largest request body accepted, in bytes
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Framework-neutral response produced by [`route`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header value
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let body =
            serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        Self::new(status, JSON, body)
    }

    fn error(err: &ApiError) -> Self {
        Self::json(&ApiResponse::<()>::error(err), err.status_code())
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let response =
            Response::from_data(self.body.into_bytes()).with_status_code(StatusCode(self.status));
        match Header::from_bytes("Content-Type", self.content_type) {
            Ok(header) => response.with_header(header),
            Err(()) => response,
        }
    }
}

/// Serve requests on `addr` until the process is stopped
pub fn serve(addr: &str, ctx: &ApiContext<'_>) -> anyhow::Result<()> {
    let server =
        Server::http(addr).map_err(|e| anyhow::anyhow!("Failed to start server on {addr}: {e}"))?;
    log::info!("Listening on {addr}");

    for mut request in server.incoming_requests() {
        // Only POST routes take a body
        let body = if *request.method() == Method::Post {
            read_body(request.as_reader(), MAX_BODY_BYTES)
        } else {
            Ok(String::new())
        };
        let reply = match body {
            Ok(body) => route(request.method(), request.url(), &body, ctx),
            Err(e) => Reply::error(&e),
        };
        log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

        if let Err(e) = request.respond(reply.into_response()) {
            log::warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

// =============================================================================
// ROUTING
// =============================================================================

/// Map a request to a reply
///
/// Query strings are ignored. `/api/v1/...` is accepted as an alias of
/// `/api/...`.
pub fn route(method: &Method, url: &str, body: &str, ctx: &ApiContext<'_>) -> Reply {
    let path = url.split_once('?').map_or(url, |(path, _)| path);

    if let Some(api_path) = api_path(path) {
        return route_api(method, path, api_path, body, ctx);
    }

    match (method, path) {
        (&Method::Get, "/") => match api::get_status(ctx) {
            Ok(data) => Reply::new(200, HTML, render::render_page(&data)),
            Err(e) => Reply::error(&e),
        },
        (&Method::Get, "/style.css") => Reply::new(200, CSS, render::STYLE_CSS),
        (_, "/" | "/style.css") => Reply::new(405, TEXT, "Method Not Allowed"),
        _ => Reply::new(404, TEXT, "Not Found"),
    }
}

fn route_api(
    method: &Method,
    full_path: &str,
    api_path: &str,
    body: &str,
    ctx: &ApiContext<'_>,
) -> Reply {
    match (method, api_path) {
        (&Method::Get, "/status") => handle_result(api::get_status(ctx)),
        (&Method::Get, "/health") => handle_result(api::get_health(ctx)),
        (&Method::Get, "/environment") => handle_result(api::get_environment(ctx)),

        // POST /mask - mask a value
        (&Method::Post, "/mask") => {
            handle_result(parse_json::<MaskRequest>(body).and_then(|req| api::mask_value(&req)))
        },

        // Single dependency: GET /health/{name}
        _ if method == &Method::Get && dependency_name(api_path).is_some() => {
            let name = dependency_name(api_path).unwrap_or_default();
            handle_result(api::get_dependency_health(ctx, name))
        },

        _ if is_api_route(api_path) => {
            Reply::error(&ApiError::method_not_allowed(&method.to_string(), full_path))
        },

        _ => Reply::error(&ApiError::not_found(format!(
            "API endpoint not found: {method} {full_path}"
        ))),
    }
}

/// Strip the `/api/v1` or `/api` prefix, only at a segment boundary
fn api_path(path: &str) -> Option<&str> {
    ["/api/v1", "/api"].into_iter().find_map(|prefix| {
        path.strip_prefix(prefix)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

fn dependency_name(api_path: &str) -> Option<&str> {
    api_path
        .strip_prefix("/health/")
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

fn is_api_route(api_path: &str) -> bool {
    matches!(api_path, "/status" | "/health" | "/environment" | "/mask")
        || dependency_name(api_path).is_some()
}

// =============================================================================
// BODY PARSING / RESPONSE CONVERSION
// =============================================================================

/// Read at most `limit` bytes of UTF-8 body, rejecting anything longer
fn read_body(mut reader: impl Read, limit: u64) -> Result<String, ApiError> {
    let read_error =
        |e: std::io::Error| ApiError::bad_request(format!("Failed to read request body: {e}"));

    let mut body = String::new();
    (&mut reader).take(limit).read_to_string(&mut body).map_err(read_error)?;

    let mut overflow = [0_u8; 1];
    if reader.read(&mut overflow).map_err(read_error)? > 0 {
        return Err(ApiError::bad_request(format!("Request body exceeds {limit} bytes")));
    }
    Ok(body)
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => Reply::json(&ApiResponse::success(data), 200),
        Err(e) => Reply::error(&e),
    }
}
