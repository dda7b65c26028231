//! This crate contains all shared UI for the admin panel.

pub mod category;
pub mod views;

mod time;

#[cfg(test)]
mod testing;

mod session;
pub use session::{make_session_store, sign_in, sign_out, use_session, LogoutButton, SessionProvider};

mod guard;
pub use guard::{authorize, authorize_session, Access, AdminGuard};

pub mod toast;
pub use toast::{show_toast, use_toasts, Toast, ToastLevel, ToastProvider};
