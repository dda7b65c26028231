//! Session context and hooks for the UI.
//!
//! The session is loaded once from the platform's [`SessionStore`] when
//! [`SessionProvider`] mounts and is then handed to components through context.
//! Pages read it with [`use_session`] instead of reaching into browser storage.

use dioxus::prelude::*;
use store::{CachedUser, Session, SessionStore};

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): token cookie + `localStorage` user record
/// - **Native**: one process-wide in-memory store
pub fn make_session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::BrowserSessionStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static STORE: std::sync::OnceLock<store::MemorySessionStore> = std::sync::OnceLock::new();
        STORE.get_or_init(store::MemorySessionStore::new).clone()
    }
}

/// Get the current session.
/// Returns a signal that updates when the user logs out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that loads the session and shares it.
/// Wrap your app with this component before any guarded page.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| make_session_store().load());
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Persist a freshly issued session and publish it to every reader.
pub fn sign_in(session: &mut Signal<Session>, token: &str, user: CachedUser) {
    session.set(remember(&make_session_store(), token, user));
}

/// Forget the session, both in storage and in the shared signal.
pub fn sign_out(session: &mut Signal<Session>) {
    session.set(forget(&make_session_store()));
}

fn remember(store: &impl SessionStore, token: &str, user: CachedUser) -> Session {
    store.save(token, &user);
    Session::new(token, user)
}

fn forget(store: &impl SessionStore) -> Session {
    store.clear();
    Session::default()
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        tracing::info!("Signing out");
        sign_out(&mut session);
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
