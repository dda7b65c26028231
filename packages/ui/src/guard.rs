//! Admin access guard.
//!
//! The guard only decides what the page renders. It is not a security
//! boundary: the backend checks the bearer token on every request.

use dioxus::prelude::*;
use store::{CachedUser, Session};

use crate::session::use_session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

/// Decide whether a visitor may see admin pages.
///
/// Requires a non-empty token and a cached user whose role is exactly `"admin"`.
pub fn authorize(token: Option<&str>, user: Option<&CachedUser>) -> Access {
    match (token, user) {
        (Some(token), Some(user)) if !token.is_empty() && user.is_admin() => Access::Granted,
        _ => Access::Denied,
    }
}

/// [`authorize`] applied to a loaded session.
pub fn authorize_session(session: &Session) -> Access {
    authorize(session.token(), session.user())
}

/// Renders its children for admins; otherwise calls `on_unauthorized` and
/// renders nothing.
#[component]
pub fn AdminGuard(on_unauthorized: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    // Re-runs only when the session signal changes
    use_effect(move || {
        if authorize_session(&session.read()) == Access::Denied {
            on_unauthorized.call(());
        }
    });

    if authorize_session(&session.read()) == Access::Granted {
        rsx! {
            {children}
        }
    } else {
        rsx! {}
    }
}
