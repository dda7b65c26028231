use dioxus::prelude::*;
use ui::views::AddCategoryView;

use crate::Route;

#[component]
pub fn AddCategory() -> Element {
    let nav = use_navigator();

    rsx! {
        AddCategoryView {
            home: Route::Dashboard {}.to_string(),
            on_unauthorized: move |_| {
                nav.replace(Route::Home {});
            },
            on_created: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}
