//! User service for business logic operations.
//!
//! Hashes local credentials before storage, keeps the immutable columns out
//! of profile updates and compares candidate passwords against stored hashes.

use std::sync::Arc;

use crate::dto::{Confirmation, CreateUser, UpdateUser};
use crate::error::{AppError, AppResult, HashError};
use crate::models::User;
use crate::repositories::UserStore;
use crate::utils::password::CredentialHasher;

const ENTITY: &str = "user";

/// User service for handling user-related business logic.
///
/// Both the store and the hasher are shared behind `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserService {
    /// Creates a new UserService with the given store and hasher.
    pub fn new(store: Arc<dyn UserStore>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { store, hasher }
    }

    /// Creates a new user.
    ///
    /// A present, non-empty password is hashed before the insert; otherwise
    /// the account is stored without a local credential. A duplicate email is
    /// reported by the database and surfaces as a creation failure.
    pub async fn create(&self, mut request: CreateUser) -> AppResult<Confirmation> {
        let password_hash = match request.password.take().filter(|p| !p.is_empty()) {
            Some(password) => Some(
                self.hash_blocking(password)
                    .await
                    .map_err(|e| AppError::creation(ENTITY, e))?,
            ),
            None => None,
        };
        let has_credential = password_hash.is_some();

        self.store
            .insert(request.into_new_user(password_hash))
            .await
            .map_err(|e| AppError::creation(ENTITY, e))?;

        tracing::info!(has_credential, "User created");
        Ok(Confirmation::new("User created successfully"))
    }

    /// Updates username, phone and avatar.
    ///
    /// Email, role and password hash are left untouched. Updating an id that
    /// does not exist still succeeds.
    pub async fn update(&self, request: UpdateUser) -> AppResult<Confirmation> {
        let (user_id, changes) = request.into_changes();

        let affected = self
            .store
            .update_profile(user_id, changes)
            .await
            .map_err(|e| AppError::update(ENTITY, e))?;

        tracing::debug!(user_id, affected, "User profile update applied");
        Ok(Confirmation::new("User updated successfully"))
    }

    /// Gets a user by their email address.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.store
            .find_by_email(email)
            .await
            .map_err(|e| AppError::lookup(ENTITY, e))
    }

    /// Compares a candidate password with a stored hash.
    ///
    /// # Returns
    /// `Ok(true)` when the candidate matches, `Ok(false)` when it does not.
    /// A malformed or unrecognised stored hash is never reported as a
    /// mismatch: it means the comparison could not run and surfaces as
    /// `AppError::Verification`.
    ///
    /// # Errors
    /// - `AppError::MissingCredential` when either side is absent or empty
    /// - `AppError::Verification` when the stored hash is malformed or in an
    ///   unknown format, or the hashing task fails
    pub async fn compare_password(
        &self,
        candidate: Option<&str>,
        stored_hash: Option<&str>,
    ) -> AppResult<bool> {
        let (Some(candidate), Some(stored_hash)) = (
            candidate.filter(|c| !c.is_empty()),
            stored_hash.filter(|h| !h.is_empty()),
        ) else {
            return Err(AppError::MissingCredential);
        };

        let hasher = Arc::clone(&self.hasher);
        let candidate = candidate.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&candidate, &stored_hash))
            .await
            .map_err(HashError::from)
            .and_then(|verified| verified)
            .map_err(|source| AppError::Verification { source })
    }

    async fn hash_blocking(&self, password: String) -> Result<String, HashError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await?
    }
}
