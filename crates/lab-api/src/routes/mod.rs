//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    middleware::map_response,
    routing::{get, patch, post, put},
    Router,
};
use lab_common::{AppConfig, AppError};
use tower_http::services::ServeDir;

use crate::handlers::{
    self, auth, blogs, bookings, contact, health, locations, packages, reports, users,
};
use crate::middleware::{auth_rate_limit_response, rate_limit_layer, rate_limit_response};
use crate::state::AppState;

/// Create the router: `/api/*` plus static `/uploads`
///
/// Every `/api` route is rate limited per IP except the health check;
/// `/api/auth/*` has its own, stricter limit on top.
pub fn create_router(config: &AppConfig) -> Result<Router<AppState>, AppError> {
    let limits = &config.rate_limit;

    let auth = auth_routes()
        .layer(rate_limit_layer(limits.window_secs, limits.auth_max_requests)?)
        .layer(map_response(auth_rate_limit_response));

    let api = Router::new()
        .merge(auth)
        .merge(user_routes())
        .merge(package_routes())
        .merge(booking_routes())
        .merge(report_routes())
        .merge(public_routes())
        .fallback(handlers::api_not_found)
        .layer(rate_limit_layer(limits.window_secs, limits.max_requests)?)
        .layer(map_response(rate_limit_response))
        // Added after the limiter so health checks never count against it
        .route("/health", get(health::health_check));

    Ok(Router::new()
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(&config.storage.upload_dir)))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
}

/// Profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/users/password", put(users::change_password))
}

/// Catalogue routes
fn package_routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(packages::list_packages))
        .route("/packages/:slug", get(packages::get_package))
        .route("/search/packages", get(packages::search_packages))
}

/// Booking routes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/:id", get(bookings::get_booking))
        .route("/bookings/:id/cancel", patch(bookings::cancel_booking))
}

/// Report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(reports::list_reports))
        .route("/reports/:id", get(reports::get_report))
}

/// Contact, locations and blog
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(contact::submit_contact))
        .route("/locations", get(locations::list_locations))
        .route("/blogs", get(blogs::list_posts))
        .route("/blogs/:slug", get(blogs::get_post))
}
