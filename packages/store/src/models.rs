//! # Session models
//!
//! The session is what the admin panel knows about the signed-in visitor: an
//! opaque token issued by the backend at login and a cached copy of the user
//! record. Both live in browser storage between page visits (cookie `token`,
//! `localStorage["user"]`) and are read through a [`crate::SessionStore`].
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`CachedUser`] | The user record the backend returned at login. Only `role` matters to the admin pages; the other fields are carried for display. |
//! | [`Session`] | Token and cached user as read from storage. Either half may be missing. |

use serde::{Deserialize, Serialize};

/// Role value that grants access to the admin pages.
pub const ADMIN_ROLE: &str = "admin";

/// User record cached in `localStorage` at login.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedUser {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl CachedUser {
    /// Whether the cached role is exactly `"admin"`.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Session context read from storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<CachedUser>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: CachedUser) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// The stored token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<&CachedUser> {
        self.user.as_ref()
    }
}
