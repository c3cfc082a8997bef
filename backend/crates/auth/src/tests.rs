use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::application::session_token::{SessionToken, now_ms};
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::{
    AuthConfig, AuthError, AuthResult, CurrentUser, MemoryUserRepository, SessionGate,
    auth_router, require_session,
};

// ============================================================================
// Fixtures
// ============================================================================

fn gate() -> SessionGate<MemoryUserRepository> {
    gate_with(AuthConfig::development())
}

fn gate_with(config: AuthConfig) -> SessionGate<MemoryUserRepository> {
    SessionGate::new(Arc::new(MemoryUserRepository::new()), Arc::new(config))
}

/// Credential store that is always down
#[derive(Clone, Default)]
struct UnavailableStore;

impl UserRepository for UnavailableStore {
    async fn insert(&self, _user: NewUser) -> AuthResult<User> {
        Err(AuthError::StorageUnavailable("connection refused".into()))
    }

    async fn find_by_email(&self, _email: &Email) -> AuthResult<Option<User>> {
        Err(AuthError::StorageUnavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _user_id: UserId) -> AuthResult<Option<User>> {
        Err(AuthError::StorageUnavailable("connection refused".into()))
    }
}

// ============================================================================
// Session Gate
// ============================================================================

#[tokio::test]
async fn register_then_authenticate_returns_the_same_user() {
    let gate = gate();

    let registered = gate
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(registered.user_id.value(), 1);

    let signed_in = gate.authenticate("alice@example.com", "hunter2").await.unwrap();
    assert_eq!(signed_in.user_id, registered.user_id);

    let wrong = gate.authenticate("alice@example.com", "wrong").await.unwrap_err();
    assert!(matches!(wrong, AuthError::CredentialMismatch));

    let unknown = gate.authenticate("bob@example.com", "x").await.unwrap_err();
    assert!(matches!(unknown, AuthError::NoSuchUser));
}

#[tokio::test]
async fn register_establishes_a_session() {
    let gate = gate();
    let registered = gate
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let user = gate
        .resolve_session(Some(registered.token.as_str()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, registered.user_id);
    assert_eq!(user.name.as_str(), "Alice");
}

#[tokio::test]
async fn email_is_matched_case_insensitively() {
    let gate = gate();
    gate.register("Alice", "Alice@Example.com", "hunter2")
        .await
        .unwrap();

    assert!(gate.authenticate("alice@example.COM", "hunter2").await.is_ok());

    let dup = gate
        .register("Other Alice", "ALICE@example.com", "another-pass")
        .await
        .unwrap_err();
    assert!(matches!(dup, AuthError::DuplicateEmail));
}

#[tokio::test]
async fn register_validates_input() {
    let gate = gate();

    for (name, email, password) in [
        ("", "alice@example.com", "hunter2"),
        ("Alice", "", "hunter2"),
        ("Alice", "not-an-email", "hunter2"),
        ("Alice", "alice@example.com", ""),
        ("Alice", "alice@example.com", "abc"),
        ("Alice", "alice@example.com", "password123"),
    ] {
        let err = gate.register(name, email, password).await.unwrap_err();
        assert!(
            matches!(err, AuthError::Validation(_)),
            "{name:?} {email:?} {password:?} gave {err:?}"
        );
    }
}

#[tokio::test]
async fn authenticate_rejects_blank_email() {
    let gate = gate();
    for email in ["", "  "] {
        let err = gate.authenticate(email, "hunter2").await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }
}

#[tokio::test]
async fn authenticate_with_empty_password_is_a_normal_failure() {
    let gate = gate();
    gate.register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let err = gate.authenticate("bob@example.com", "").await.unwrap_err();
    assert!(matches!(err, AuthError::NoSuchUser));

    let err = gate.authenticate("alice@example.com", "").await.unwrap_err();
    assert!(matches!(err, AuthError::CredentialMismatch));
}

#[tokio::test]
async fn authenticate_with_unparsable_email_is_no_such_user() {
    let gate = gate();
    let err = gate.authenticate("nobody", "hunter2").await.unwrap_err();
    assert!(matches!(err, AuthError::NoSuchUser));
}

#[tokio::test]
async fn policy_changes_do_not_lock_out_existing_accounts() {
    let repo = Arc::new(MemoryUserRepository::new());
    let lenient = SessionGate::new(repo.clone(), Arc::new(AuthConfig::development()));
    lenient
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let mut strict = AuthConfig::development();
    strict.password_policy.min_length = 12;
    let strict = SessionGate::new(repo, Arc::new(strict));

    assert!(strict.authenticate("alice@example.com", "hunter2").await.is_ok());
}

#[tokio::test]
async fn resolve_session_is_anonymous_for_bad_tokens() {
    let gate = gate();
    let registered = gate
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();
    let secret = gate.config().session_secret;

    assert!(gate.resolve_session(None).await.unwrap().is_none());

    let expired = SessionToken::issue(registered.user_id, now_ms() - 1, &secret);
    let unknown_user = SessionToken::issue(UserId::from_i64(42), now_ms() + 60_000, &secret);
    let foreign = SessionToken::issue(registered.user_id, now_ms() + 60_000, &[1u8; 32]);

    for token in [
        "never-issued",
        "1",
        expired.as_str(),
        unknown_user.as_str(),
        foreign.as_str(),
    ] {
        assert!(
            gate.resolve_session(Some(token)).await.unwrap().is_none(),
            "{token}"
        );
    }
}

#[tokio::test]
async fn end_session_is_idempotent_and_stateless() {
    let gate = gate();
    let session = gate
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();
    let token = session.token.as_str();

    gate.end_session(Some(token));
    gate.end_session(Some(token));
    gate.end_session(None);
    gate.end_session(Some("garbage"));

    // Nothing server-side to revoke: the token lives until it expires
    let user = gate.resolve_session(Some(token)).await.unwrap();
    assert_eq!(user.map(|u| u.id), Some(session.user_id));
}

#[tokio::test]
async fn store_failures_surface_as_storage_unavailable() {
    let gate = SessionGate::new(Arc::new(UnavailableStore), Arc::new(AuthConfig::development()));
    let token = SessionToken::issue(UserId::from_i64(1), now_ms() + 60_000, &gate.config().session_secret);

    assert!(matches!(
        gate.resolve_session(Some(token.as_str())).await,
        Err(AuthError::StorageUnavailable(_))
    ));
    assert!(matches!(
        gate.authenticate("alice@example.com", "hunter2").await,
        Err(AuthError::StorageUnavailable(_))
    ));
    assert!(matches!(
        gate.register("Alice", "alice@example.com", "hunter2").await,
        Err(AuthError::StorageUnavailable(_))
    ));

    // Invalid tokens never reach the store
    assert!(gate.resolve_session(Some("garbage")).await.unwrap().is_none());
}

// ============================================================================
// Error mapping
// ============================================================================

#[test]
fn error_status_codes() {
    let cases = [
        (AuthError::Validation("bad".into()), StatusCode::BAD_REQUEST),
        (AuthError::DuplicateEmail, StatusCode::CONFLICT),
        (AuthError::NoSuchUser, StatusCode::UNAUTHORIZED),
        (AuthError::CredentialMismatch, StatusCode::UNAUTHORIZED),
        (
            AuthError::StorageUnavailable("down".into()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            AuthError::Internal("boom".into()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.status_code(), expected, "{err:?}");
        assert_eq!(err.kind().status_code(), expected.as_u16(), "{err:?}");
        assert_eq!(err.into_response().status(), expected);
    }
}

#[test]
fn unknown_email_is_hidden_unless_configured() {
    assert!(matches!(
        AuthError::NoSuchUser.for_client(false),
        AuthError::CredentialMismatch
    ));
    assert!(matches!(
        AuthError::NoSuchUser.for_client(true),
        AuthError::NoSuchUser
    ));
    assert!(matches!(
        AuthError::DuplicateEmail.for_client(false),
        AuthError::DuplicateEmail
    ));
}

#[test]
fn server_errors_do_not_leak_details() {
    let app_err = AuthError::StorageUnavailable("db at 10.0.0.5 refused".into()).to_app_error();
    assert!(!app_err.message().contains("10.0.0.5"));
}

// ============================================================================
// HTTP
// ============================================================================

fn app<R>(gate: SessionGate<R>) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let protected = Router::new()
        .route(
            "/whoami",
            get(|Extension(user): Extension<CurrentUser>| async move { user.email.to_string() }),
        )
        .layer(axum::middleware::from_fn_with_state(
            gate.clone(),
            require_session::<R>,
        ));

    Router::new()
        .nest("/api/auth", auth_router(gate))
        .merge(protected)
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_cookie(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// `name=value` part of the Set-Cookie header
fn session_cookie(response: &Response) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn http_signup_signin_status_signout() {
    let app = app(gate());

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/auth/signup",
            serde_json::json!({ "name": "Alice", "email": "alice@example.com", "password": "hunter2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let cookie = session_cookie(&response);
    assert!(cookie.starts_with("auth_session="));
    assert_eq!(json_body(response).await, serde_json::json!({ "userId": 1 }));

    let response = app
        .clone()
        .oneshot(json_post(
            "/api/auth/signin",
            serde_json::json!({ "email": "alice@example.com", "password": "hunter2" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    let cookie = session_cookie(&response);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/api/auth/status", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(
        json_body(response).await,
        serde_json::json!({
            "authenticated": true,
            "userId": 1,
            "name": "Alice",
            "email": "alice@example.com",
        })
    );

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/auth/signout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cleared.starts_with("auth_session=;"));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn http_status_is_anonymous_without_cookie() {
    let response = app(gate())
        .oneshot(get_with_cookie("/api/auth/status", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "authenticated": false })
    );
}

#[tokio::test]
async fn http_signin_failures_share_one_message_by_default() {
    let app = app(gate());
    app.clone()
        .oneshot(json_post(
            "/api/auth/signup",
            serde_json::json!({ "name": "Alice", "email": "alice@example.com", "password": "hunter2" }),
        ))
        .await
        .unwrap();

    for email in ["alice@example.com", "bob@example.com"] {
        let response = app
            .clone()
            .oneshot(json_post(
                "/api/auth/signin",
                serde_json::json!({ "email": email, "password": "wrong" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body = json_body(response).await;
        assert_eq!(body["detail"], "Email address and password do not match");
    }
}

#[tokio::test]
async fn http_signin_reveals_unknown_email_when_configured() {
    let config = AuthConfig {
        reveal_unknown_email: true,
        ..AuthConfig::development()
    };
    let response = app(gate_with(config))
        .oneshot(json_post(
            "/api/auth/signin",
            serde_json::json!({ "email": "bob@example.com", "password": "x" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await["detail"],
        "No user with that email exists"
    );
}

#[tokio::test]
async fn http_signup_errors() {
    let app = app(gate());
    let signup = serde_json::json!({ "name": "Alice", "email": "alice@example.com", "password": "hunter2" });

    app.clone()
        .oneshot(json_post("/api/auth/signup", signup.clone()))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_post("/api/auth/signup", signup))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(json_post(
            "/api/auth/signup",
            serde_json::json!({ "email": "carol@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["status"], 400);
}

#[tokio::test]
async fn http_malformed_bodies_are_problem_json() {
    let app = app(gate());

    let malformed = Request::post("/api/auth/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let no_content_type = Request::post("/api/auth/signin")
        .body(Body::from(r#"{"email":"alice@example.com","password":"hunter2"}"#))
        .unwrap();

    for request in [malformed, no_content_type] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(json_body(response).await["status"], 400);
    }
}

#[tokio::test]
async fn http_protected_route_requires_session() {
    let gate = gate();
    let session = gate
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();
    let app = app(gate);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/whoami", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers()["x-auth-required"], "true");

    let response = app
        .clone()
        .oneshot(get_with_cookie("/whoami", Some("auth_session=1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookie = format!("auth_session={}", session.token);
    let response = app
        .oneshot(get_with_cookie("/whoami", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"alice@example.com");
}

#[tokio::test]
async fn http_store_outage_is_503_not_anonymous() {
    let gate = SessionGate::new(Arc::new(UnavailableStore), Arc::new(AuthConfig::development()));
    let token = SessionToken::issue(UserId::from_i64(1), now_ms() + 60_000, &gate.config().session_secret);
    let cookie = format!("auth_session={}", token);
    let app = app(gate);

    let response = app
        .clone()
        .oneshot(get_with_cookie("/whoami", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = app
        .oneshot(get_with_cookie("/api/auth/status", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
