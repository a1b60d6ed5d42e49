//! Signup and login use-cases.
//!
//! Passwords are stored as `salt$digest` pairs: a random 16-byte salt plus
//! the hex-encoded SHA-256 of salt and password.

use std::sync::Arc;

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::error::Error;
use crate::domain::ports::{NewUserRecord, StoreError, UserRepository};
use crate::domain::user::{User, UserId, Username, UsernameError};

/// Field error reported when a signup username is already registered.
pub const USERNAME_TAKEN_WARNING: &str = "a user with that username already exists";

const PASSWORD_SALT_LEN: usize = 16;

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new user and return it.
    pub async fn sign_up(&self, username: &str, password: &str) -> Result<User, Error> {
        let username = Username::new(username).map_err(map_username_error)?;
        if password.is_empty() {
            return Err(Error::validation("password", "password must not be empty"));
        }
        let record = NewUserRecord {
            username,
            password_digest: digest_password(password),
            created_at: Utc::now().naive_utc(),
        };
        match self.users.insert(record).await {
            Ok(user) => Ok(user),
            Err(StoreError::Conflict { .. }) => {
                Err(Error::validation("username", USERNAME_TAKEN_WARNING))
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Check credentials and return the authenticated user id.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserId, Error> {
        let credentials = self.users.credentials_by_username(username).await?;
        match credentials {
            Some(stored) if verify_password(password, &stored.password_digest) => Ok(stored.id),
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}

fn map_username_error(error: UsernameError) -> Error {
    Error::validation("username", error.to_string())
}

/// Produce a `salt$digest` pair from a fresh random salt.
pub(crate) fn digest_password(password: &str) -> String {
    let mut salt = [0u8; PASSWORD_SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    format!("{}${}", hex::encode(salt), hash_with_salt(&salt, password))
}

fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    hash_with_salt(&salt, password) == digest
}

fn hash_with_salt(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_round_trips() {
        let stored = digest_password("swordfish");
        assert!(verify_password("swordfish", &stored));
    }

    #[test]
    fn wrong_password_fails_verification() {
        let stored = digest_password("swordfish");
        assert!(!verify_password("swordfish2", &stored));
    }

    #[test]
    fn salts_differ_between_digests() {
        assert_ne!(digest_password("swordfish"), digest_password("swordfish"));
    }

    #[test]
    fn malformed_stored_digest_fails_closed() {
        assert!(!verify_password("swordfish", "not-a-digest"));
        assert!(!verify_password("swordfish", "zz$deadbeef"));
    }
}
