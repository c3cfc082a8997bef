//! Auth Middleware
//!
//! Gate for protected routes. Mount with
//! `axum::middleware::from_fn_with_state(gate, require_session::<R>)`.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderValue, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::application::session_gate::SessionGate;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{display_name::DisplayName, email::Email, user_id::UserId};

/// Header telling clients that the route needs a signed-in user
pub const AUTH_REQUIRED_HEADER: &str = "x-auth-required";

/// The signed-in user, inserted into request extensions by
/// [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: DisplayName,
    pub email: Email,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(auth_required)
    }
}

/// Middleware that requires a valid session
///
/// Anonymous callers get `401` with `X-Auth-Required: true`. A credential
/// store failure is reported as such rather than as anonymous.
pub async fn require_session<R>(
    State(gate): State<SessionGate<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), &gate.config().session_cookie_name);

    match gate.resolve_session(token.as_deref()).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(CurrentUser::from(user));
            next.run(req).await
        }
        Ok(None) => auth_required(),
        Err(e) => e.into_response(),
    }
}

fn auth_required() -> Response {
    let mut response = AppError::unauthorized("Sign in required")
        .with_action("Sign in and try again")
        .into_response();
    response
        .headers_mut()
        .insert(AUTH_REQUIRED_HEADER, HeaderValue::from_static("true"));
    response
}
