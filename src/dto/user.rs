//! User DTOs.

use serde::Deserialize;

use crate::models::{NewUser, UserProfileChanges};
use crate::utils::normalize::normalize_optional;

/// Input for creating a user.
///
/// A missing or empty `password` creates an account without a local
/// credential, used for externally authenticated logins.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl CreateUser {
    /// Converts the request into a NewUser row carrying `password_hash`.
    pub fn into_new_user(self, password_hash: Option<String>) -> NewUser {
        NewUser {
            username: self.username,
            email: self.email,
            password_hash,
            role: self.role,
            phone: normalize_optional(self.phone),
            avatar_url: normalize_optional(self.avatar_url),
        }
    }
}

/// Input for updating a user's profile.
///
/// Email, role and password hash cannot be changed through this request.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateUser {
    pub user_id: i32,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UpdateUser {
    pub fn into_changes(self) -> (i32, UserProfileChanges) {
        let changes = UserProfileChanges {
            username: self.username,
            phone: normalize_optional(self.phone),
            avatar_url: normalize_optional(self.avatar_url),
        };
        (self.user_id, changes)
    }
}
