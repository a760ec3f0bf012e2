//! User repository for async database operations.
//!
//! Implements [`UserStore`] for the users table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::DatabaseError;
use crate::models::{NewUser, User, UserProfileChanges};
use crate::repositories::UserStore;

/// User repository holding an async connection pool.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    /// Creates a new user in the database.
    ///
    /// A duplicate email surfaces as a unique-violation [`DatabaseError`].
    async fn insert(&self, new_user: NewUser) -> Result<(), DatabaseError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .execute(&mut conn)
            .await?;

        Ok(())
    }

    /// Updates username, phone and avatar only.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    async fn update_profile(
        &self,
        target_id: i32,
        changes: UserProfileChanges,
    ) -> Result<usize, DatabaseError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let affected = diesel::update(users.filter(user_id.eq(target_id)))
            .set(&changes)
            .execute(&mut conn)
            .await?;

        Ok(affected)
    }

    /// Finds a user by their email address.
    ///
    /// # Arguments
    /// * `user_email` - The user's email address
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, DatabaseError> {
        use crate::schema::users::dsl::*;
        let mut conn = self.pool.get().await?;

        let user = users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()?;

        Ok(user)
    }
}
