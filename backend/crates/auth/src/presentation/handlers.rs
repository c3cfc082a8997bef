//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;

use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::session_gate::SessionGate;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    SessionResponse, SessionStatusResponse, SignInRequest, SignUpRequest,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub gate: SessionGate<R>,
}

// Manual impl: the repository itself need not be Clone
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    req: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = req?;
    let session = state.gate.register(req.name, req.email, req.password).await?;
    let cookie = set_cookie_header(&state.gate.config().cookie_config(), session.token.as_str());

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            user_id: session.user_id.value(),
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    req: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = req?;
    let config = state.gate.config();
    let session = state
        .gate
        .authenticate(req.email, req.password)
        .await
        .map_err(|e| e.for_client(config.reveal_unknown_email))?;

    let cookie = set_cookie_header(&config.cookie_config(), session.token.as_str());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse {
            user_id: session.user_id.value(),
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + Send + Sync + 'static,
{
    let config = state.gate.config();
    let token = extract_cookie(&headers, &config.session_cookie_name);
    state.gate.end_session(token.as_deref());

    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, delete_cookie_header(&config.cookie_config()))],
    )
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.gate.config().session_cookie_name);
    let user = state.gate.resolve_session(token.as_deref()).await?;

    Ok(Json(match user {
        Some(user) => SessionStatusResponse::from(&user),
        None => SessionStatusResponse::anonymous(),
    }))
}
