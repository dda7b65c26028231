//! # Browser session store — cookie + `localStorage`
//!
//! [`BrowserSessionStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. The login flow writes the backend token into the `token`
//! cookie and the user record as JSON into `localStorage["user"]`; this store
//! reads and clears the same locations.
//!
//! ## Error handling
//!
//! Browser storage can be unavailable (private mode, blocked cookies). Reads
//! degrade to "no session" and writes are skipped with a warning, so a broken
//! storage behaves like a signed-out visitor.

use crate::models::CachedUser;
use crate::session::{cookie_value, parse_cached_user, SessionStore, TOKEN_KEY, USER_KEY};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

/// Cookie/localStorage-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn document(&self) -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn local_storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn set_cookie(&self, value: &str) {
        let Some(document) = self.document() else {
            tracing::warn!("No document available, cookie not written");
            return;
        };
        if document.set_cookie(value).is_err() {
            tracing::warn!("Failed to write session cookie");
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        let cookies = self.document()?.cookie().ok()?;
        cookie_value(&cookies, TOKEN_KEY)
    }

    fn cached_user(&self) -> Option<CachedUser> {
        let raw = self.local_storage()?.get_item(USER_KEY).ok()??;
        parse_cached_user(&raw)
    }

    fn save(&self, token: &str, user: &CachedUser) {
        self.set_cookie(&format!("{TOKEN_KEY}={token}; path=/"));

        let Some(storage) = self.local_storage() else {
            tracing::warn!("localStorage unavailable, user not cached");
            return;
        };
        match serde_json::to_string(user) {
            Ok(json) => {
                if storage.set_item(USER_KEY, &json).is_err() {
                    tracing::warn!("Failed to cache user record");
                }
            }
            Err(e) => tracing::warn!("Failed to serialise user record: {}", e),
        }
    }

    fn clear(&self) {
        self.set_cookie(&format!("{TOKEN_KEY}=; path=/; max-age=0"));
        if let Some(storage) = self.local_storage() {
            if storage.remove_item(USER_KEY).is_err() {
                tracing::warn!("Failed to remove cached user record");
            }
        }
    }
}
