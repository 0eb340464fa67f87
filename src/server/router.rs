//! Router assembly

use crate::server::handlers;
use crate::server::state::SharedState;
use axum::Router;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the full application router.
///
/// Entity list pages and export downloads are public reads of sample data;
/// the session-aware routes (`/api/auth/me`, notifications) sit behind the
/// bearer-token middleware.
pub fn build_router(state: SharedState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(handlers::me))
        .route("/api/notifications", get(handlers::list_notifications))
        .route(
            "/api/notifications/{id}/read",
            patch(handlers::mark_notification_read),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::require_auth,
        ));

    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/dashboard", get(handlers::dashboard))
        .route("/api/bookings", get(handlers::list_bookings))
        .route("/api/bookings/export", get(handlers::export_bookings))
        .route("/api/payments", get(handlers::list_payments))
        .route("/api/payments/export", get(handlers::export_payments))
        .route("/api/reviews", get(handlers::list_reviews))
        .route("/api/reviews/export", get(handlers::export_reviews))
        .route("/api/tickets", get(handlers::list_tickets))
        .route("/api/tickets/export", get(handlers::export_tickets))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/export", get(handlers::export_categories))
        .route("/api/customers", get(handlers::list_customers))
        .route("/api/customers/export", get(handlers::export_customers))
        .route("/api/providers", get(handlers::list_providers))
        .route("/api/providers/export", get(handlers::export_providers))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
