//! Activity Router

use auth::SessionGate;
use auth::domain::repository::UserRepository;
use auth::require_session;
use axum::{Router, middleware, routing::{get, post}};

use crate::domain::ActivityKind;
use crate::presentation::handlers;

/// Create the router for one activity kind, gated by `gate`
///
/// Intended to be nested under [`ActivityKind::list_path`].
pub fn activity_router<R>(kind: ActivityKind, gate: SessionGate<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::list).post(handlers::create))
        .route("/{id}", get(handlers::show).post(handlers::update))
        .route("/{id}/delete", post(handlers::delete))
        .route_layer(middleware::from_fn_with_state(gate, require_session::<R>))
        .with_state(kind)
}
