//! Port abstraction for user persistence adapters.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::user::{User, UserId, Username};

use super::StoreError;

/// Insert payload for a new user row.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: Username,
    pub password_digest: String,
    pub created_at: NaiveDateTime,
}

/// Login projection pairing a user id with its stored digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: UserId,
    pub password_digest: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; `Conflict` when the username is taken.
    async fn insert(&self, record: NewUserRecord) -> Result<User, StoreError>;

    /// Look up login credentials for `username`.
    async fn credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, StoreError>;
}
