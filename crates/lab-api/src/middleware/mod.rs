//! Middleware stack for the API server
//!
//! Security headers, CORS, compression, request ids, tracing, timeouts and
//! per-IP rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use governor::middleware::NoOpMiddleware;
use lab_common::{AppConfig, AppError, CorsConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::response::ApiError;
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-IP limiter keyed on the client address (`X-Forwarded-For` first)
pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware>;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self';\
base-uri 'self';\
font-src 'self' https://fonts.gstatic.com;\
form-action 'self';\
frame-ancestors 'self';\
img-src 'self' data: https:;\
object-src 'none';\
script-src 'self';\
script-src-attr 'none';\
style-src 'self' 'unsafe-inline' https://fonts.googleapis.com;\
upgrade-insecure-requests";

/// Headers added to every response unless a handler already set them
const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=31536000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// Apply the global middleware stack
///
/// Layers run outside-in in reverse order of the `.layer` calls:
/// Request ID -> Trace -> Timeout -> CORS -> Compression -> Security headers -> Handler
pub fn apply_middleware(router: Router<AppState>, config: &AppConfig) -> Router<AppState> {
    let router = apply_security_headers(router);

    router
        .layer(DefaultBodyLimit::max(config.api.body_limit_bytes()))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(&config.cors))
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            Duration::from_secs(30),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

fn apply_security_headers(router: Router<AppState>) -> Router<AppState> {
    SECURITY_HEADERS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}

/// Rate limiter allowing `max_requests` per `window_secs` per client IP.
///
/// The bucket holds `max_requests` and regains one slot per full window, so
/// no client gets more than `max_requests` through inside any one window.
pub fn rate_limit_layer(window_secs: u64, max_requests: u32) -> Result<RateLimitLayer, AppError> {
    if max_requests == 0 {
        return Err(AppError::Config(
            "rate limit must allow at least one request".to_string(),
        ));
    }

    let config = GovernorConfigBuilder::default()
        .period(Duration::from_secs(window_secs))
        .burst_size(max_requests)
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .ok_or_else(|| {
            AppError::Config(format!(
                "invalid rate limit: {max_requests} requests per {window_secs}s"
            ))
        })?;

    Ok(GovernorLayer {
        config: Arc::new(config),
    })
}

/// Rewrite the general limiter's plain-text 429 into the JSON error body
pub async fn rate_limit_response(response: Response) -> Response {
    rewrite_429(response, ApiError::RateLimited)
}

/// Rewrite the auth limiter's plain-text 429 into the JSON error body
pub async fn auth_rate_limit_response(response: Response) -> Response {
    rewrite_429(response, ApiError::AuthRateLimited)
}

/// A 429 that already carries JSON came from an inner limiter and is kept
fn rewrite_429(response: Response, error: ApiError) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS || is_json(&response) {
        return response;
    }

    let retry_after = response.headers().get(header::RETRY_AFTER).cloned();
    let mut rewritten = error.into_response();
    if let Some(value) = retry_after {
        rewritten.headers_mut().insert(header::RETRY_AFTER, value);
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// CORS restricted to the configured origins, with credentials
fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if origins.is_empty() {
        warn!("CORS: No allowed origins configured. Requests from browsers will be blocked.");
    } else {
        info!("CORS: Allowing {} configured origins", origins.len());
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(REQUEST_ID_HEADER),
            header::RETRY_AFTER,
        ])
}
