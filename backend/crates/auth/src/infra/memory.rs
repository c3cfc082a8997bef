//! In-memory credential store
//!
//! Process-local and lost on restart. Ids are assigned sequentially from 1.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    last_id: i64,
    users: HashMap<UserId, User>,
    by_email: HashMap<Email, UserId>,
}

/// In-memory [`UserRepository`]
///
/// Cloning yields another handle to the same store.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.inner.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: NewUser) -> AuthResult<User> {
        // Check and insert under one write lock
        let mut inner = self.inner.write().await;

        if inner.by_email.contains_key(&user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        inner.last_id += 1;
        let id = UserId::from_i64(inner.last_id);
        let user = user.into_user(id);

        inner.by_email.insert(user.email.clone(), id);
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned())
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&user_id).cloned())
    }
}
