use std::sync::{Arc, Mutex};

use crate::models::CachedUser;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    token: Arc<Mutex<Option<String>>>,
    user: Arc<Mutex<Option<CachedUser>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a session.
    pub fn with_session(token: &str, user: CachedUser) -> Self {
        let store = Self::new();
        store.save(token, &user);
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn cached_user(&self) -> Option<CachedUser> {
        self.user.lock().unwrap().clone()
    }

    fn save(&self, token: &str, user: &CachedUser) {
        *self.token.lock().unwrap() = Some(token.to_string());
        *self.user.lock().unwrap() = Some(user.clone());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
        *self.user.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> CachedUser {
        CachedUser {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_empty_store_loads_anonymous() {
        let store = MemorySessionStore::new();
        let session = store.load();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemorySessionStore::new();
        store.save("tok", &admin());

        let session = store.load();
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.user(), Some(&admin()));
    }

    #[test]
    fn test_clear_removes_both_halves() {
        let store = MemorySessionStore::with_session("tok", admin());
        store.clear();
        assert!(store.token().is_none());
        assert!(store.cached_user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        other.save("tok", &admin());
        assert_eq!(store.token().as_deref(), Some("tok"));
    }
}
