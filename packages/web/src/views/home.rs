use dioxus::prelude::*;
use ui::{authorize_session, use_session, Access};

use crate::Route;

/// Public landing page. Admins get a link to the dashboard.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let is_admin = authorize_session(&session.read()) == Access::Granted;

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",
            h1 { class: "mb-2 font-bold text-[1.75rem]", "Storefront Admin" }
            if is_admin {
                Link { to: Route::Dashboard {}, "Go to dashboard" }
            } else {
                p { "Sign in with an administrator account to manage the catalogue." }
            }
        }
    }
}
