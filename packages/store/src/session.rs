//! # SessionStore — where the session lives between page visits
//!
//! All reads and writes of the session go through the [`SessionStore`] trait, so
//! the same UI logic works against browser storage ([`crate::BrowserSessionStore`]
//! on the web platform) or an in-memory store ([`crate::MemorySessionStore`]) for
//! native builds and tests.
//!
//! Storage is synchronous on every platform we target (cookies and
//! `localStorage` are synchronous browser APIs), so the trait is too.

use crate::models::{CachedUser, Session};

/// Cookie holding the backend token.
pub const TOKEN_KEY: &str = "token";
/// `localStorage` key holding the cached user record as JSON.
pub const USER_KEY: &str = "user";

pub trait SessionStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// The cached user record, if present and readable.
    fn cached_user(&self) -> Option<CachedUser>;

    /// Persist a session (called at login).
    fn save(&self, token: &str, user: &CachedUser);

    /// Remove the token and cached user (called at logout).
    fn clear(&self);

    /// Read both halves of the session.
    fn load(&self) -> Session {
        Session {
            token: self.token(),
            user: self.cached_user(),
        }
    }
}

/// Extract a cookie value from a `document.cookie` style string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Parse the cached user JSON, treating anything unreadable as absent.
pub fn parse_cached_user(raw: &str) -> Option<CachedUser> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Ignoring unreadable cached user: {}", e);
            None
        }
    }
}
