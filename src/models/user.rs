use diesel::prelude::*;
use serde::Serialize;

/// User model for reading from database
/// Selectable maps columns by name, so the struct is independent of the
/// table's physical column order
#[derive(Debug, Queryable, Selectable, Serialize, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    /// `None` marks an account authenticated by an external provider
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub role: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl User {
    /// Whether the account can log in with a local password
    pub fn has_local_credential(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|h| !h.is_empty())
    }
}

/// NewUser model for inserting new records
/// `password_hash` is already hashed, never plaintext
#[derive(Debug, Insertable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

/// Profile fields a user may change after creation
/// `treat_none_as_null` turns a missing phone or avatar into SQL NULL
/// instead of skipping the column
#[derive(Debug, AsChangeset, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
#[diesel(treat_none_as_null = true)]
pub struct UserProfileChanges {
    pub username: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}
