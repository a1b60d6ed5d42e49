//! SQLite-backed `UserRepository` adapter.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::ports::{NewUserRecord, StoreError, UserCredentials, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_helpers::{map_diesel_error, with_connection};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, record: NewUserRecord) -> Result<User, StoreError> {
        with_connection(&self.pool, move |conn| {
            let row = NewUserRow {
                username: record.username.into(),
                password_digest: record.password_digest,
                created_at: record.created_at,
            };
            let inserted: UserRow = diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result(conn)
                .map_err(map_diesel_error)?;
            User::try_from(inserted)
                .map_err(|error| StoreError::query(format!("stored user invalid: {error}")))
        })
        .await
    }

    async fn credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let username = username.to_owned();
        with_connection(&self.pool, move |conn| {
            let row = users::table
                .filter(users::username.eq(&username))
                .select((users::id, users::password_digest))
                .first::<(i32, String)>(conn)
                .optional()
                .map_err(map_diesel_error)?;
            Ok(row.map(|(id, password_digest)| UserCredentials {
                id: UserId::new(id),
                password_digest,
            }))
        })
        .await
    }
}
