//! Router assembly

use activity::{ActivityKind, activity_router};
use auth::domain::repository::UserRepository;
use auth::{AuthError, SessionGate, auth_router};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, header};
use axum::response::Redirect;
use axum::{Router, routing::get};
use platform::cookie::extract_cookie;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Where a signed-in visitor lands
const SIGNED_IN_LANDING: &str = "/api/contributions";
/// Where an anonymous visitor lands
const ANONYMOUS_LANDING: &str = "/api/auth/status";

/// Build the full application router
pub fn build_app<R>(gate: SessionGate<R>, frontend_origins: Vec<HeaderValue>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(frontend_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = ActivityKind::ALL
        .into_iter()
        .fold(Router::new(), |app, kind| {
            app.nest(&kind.list_path(), activity_router(kind, gate.clone()))
        });

    app.route("/", get(landing::<R>).with_state(gate.clone()))
        .nest("/api/auth", auth_router(gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// GET /
async fn landing<R>(
    State(gate): State<SessionGate<R>>,
    headers: HeaderMap,
) -> Result<Redirect, AuthError>
where
    R: UserRepository + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &gate.config().session_cookie_name);
    let target = match gate.resolve_session(token.as_deref()).await? {
        Some(_) => SIGNED_IN_LANDING,
        None => ANONYMOUS_LANDING,
    };
    Ok(Redirect::to(target))
}
