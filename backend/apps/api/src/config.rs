//! Server configuration from environment variables

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::HeaderValue;
use platform::password::HashCost;

const DEFAULT_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

pub struct ServerConfig {
    pub addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Build configuration from `lookup`
    ///
    /// Outside development a session secret must be supplied; otherwise a
    /// random one is generated and sessions do not survive a restart.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        development: bool,
    ) -> anyhow::Result<Self> {
        let addr = lookup("TALLY_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("TALLY_ADDR must be a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let mut auth = if development {
            AuthConfig::development()
        } else {
            AuthConfig::default()
        };

        match lookup("AUTH_SESSION_SECRET") {
            Some(secret_b64) => {
                let bytes = platform::crypto::from_base64(secret_b64.trim())
                    .context("AUTH_SESSION_SECRET must be base64")?;
                auth.session_secret = bytes
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("AUTH_SESSION_SECRET must decode to 32 bytes"))?;
            }
            None if development => {
                tracing::warn!("AUTH_SESSION_SECRET not set, using a random secret");
            }
            None => bail!("AUTH_SESSION_SECRET must be set in production"),
        }

        if let Some(pepper_b64) = lookup("AUTH_PASSWORD_PEPPER") {
            let pepper = platform::crypto::from_base64(pepper_b64.trim())
                .context("AUTH_PASSWORD_PEPPER must be base64")?;
            if pepper.is_empty() {
                bail!("AUTH_PASSWORD_PEPPER must not be empty");
            }
            auth.password_pepper = Some(pepper);
        }

        if let Some(secure) = parse_var::<bool>(&lookup, "AUTH_COOKIE_SECURE")? {
            auth.cookie_secure = secure;
        }
        if let Some(secs) = parse_var::<u64>(&lookup, "AUTH_SESSION_TTL_SECS")? {
            auth.session_ttl = Duration::from_secs(secs);
        }
        if let Some(reveal) = parse_var::<bool>(&lookup, "AUTH_REVEAL_UNKNOWN_EMAIL")? {
            auth.reveal_unknown_email = reveal;
        }

        let base = if development {
            HashCost::low()
        } else {
            HashCost::default()
        };
        auth.hash_cost = HashCost {
            memory_kib: parse_var(&lookup, "PASSWORD_HASH_MEMORY_KIB")?.unwrap_or(base.memory_kib),
            iterations: parse_var(&lookup, "PASSWORD_HASH_ITERATIONS")?.unwrap_or(base.iterations),
            parallelism: parse_var(&lookup, "PASSWORD_HASH_PARALLELISM")?
                .unwrap_or(base.parallelism),
        };
        auth.hash_cost
            .validate()
            .context("PASSWORD_HASH_* values are not accepted by argon2")?;

        Ok(Self {
            addr,
            frontend_origins,
            auth,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("{key} has an invalid value: {raw:?}"))
        })
        .transpose()
}
