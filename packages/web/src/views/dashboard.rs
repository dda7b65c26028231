//! Admin dashboard landing page.

use dioxus::prelude::*;
use ui::{use_session, AdminGuard, LogoutButton};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    let session = use_session();
    let greeting = session
        .read()
        .user()
        .map(|u| format!("Welcome, {}", if u.name.is_empty() { &u.email } else { &u.name }))
        .unwrap_or_default();

    rsx! {
        AdminGuard {
            on_unauthorized: move |_| {
                nav.replace(Route::Home {});
            },
            div {
                class: "w-full p-4 min-h-screen flex flex-col gap-4",
                h1 { class: "text-2xl", "Dashboard" }
                p { "{greeting}" }
                ul {
                    li {
                        Link { to: Route::AddCategory {}, "Add Category" }
                    }
                }
                LogoutButton {
                    class: "btn",
                    on_logout: move |_| {
                        nav.replace(Route::Home {});
                    },
                }
            }
        }
    }
}
