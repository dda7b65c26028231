use api::{AdminConfig, BackendClient, CloudinaryClient, ImageFile};
use dioxus::prelude::*;

use crate::category::{schedule_redirect, submit, CategoryForm, Field, FieldErrors, PageEffects};
use crate::guard::AdminGuard;
use crate::session::use_session;
use crate::toast::{show_toast, use_toasts, Toast, Toasts};

/// Submission effects applied to the page's signals.
struct SignalEffects {
    loading: Signal<bool>,
    toasts: Signal<Toasts>,
}

impl PageEffects for SignalEffects {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn toast(&mut self, toast: Toast) {
        show_toast(&mut self.toasts, toast);
    }
}

/// Admin-only page for creating a category.
///
/// `on_unauthorized` fires instead of rendering when the visitor is not an
/// admin; `on_created` fires two seconds after the backend accepts the category.
/// `home` is the breadcrumb target.
#[component]
pub fn AddCategoryView(
    home: String,
    on_unauthorized: EventHandler<()>,
    on_created: EventHandler<()>,
) -> Element {
    rsx! {
        AdminGuard {
            on_unauthorized: on_unauthorized,
            AddCategoryPage { home: home, on_created: on_created }
        }
    }
}

#[component]
fn AddCategoryPage(home: String, on_created: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let config = use_hook(AdminConfig::load);
    let mut form = use_signal(CategoryForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let valid = match form.read().validate() {
            Ok(valid) => valid,
            Err(missing) => {
                errors.set(missing);
                return;
            }
        };
        errors.set(FieldErrors::default());

        let config = config.clone();
        spawn(async move {
            let host = CloudinaryClient::new(&config.image_host);
            let backend = BackendClient::for_session(&config.backend_url, &session.read());
            let mut effects = SignalEffects { loading, toasts };

            let outcome = submit(&host, &backend, &mut effects, valid).await;
            if let Some(delay) = outcome.redirect() {
                schedule_redirect(delay, move || on_created.call(())).await;
            }
        });
    };

    let mut edit = move |field: Field, value: String| {
        form.write().set_text(field, value);
        errors.write().clear(field);
    };

    let name_label = Field::Name.label();
    let slug_label = Field::Slug.label();
    let description_label = Field::Description.label();
    let image_label = Field::Image.label();

    rsx! {
        div {
            class: "w-full p-4 min-h-screen bg-gray-50 flex flex-col",

            div {
                class: "text-sm breadcrumbs border-b-2 border-b-orange-600",
                ul {
                    li { Link { to: home, "Home" } }
                    li { "Add Category" }
                }
            }

            div {
                class: "w-full h-20 my-2 text-center",
                h1 { class: "text-2xl py-2", "Add Category" }
            }

            if loading() {
                div {
                    class: "w-full flex-col h-96 flex items-center justify-center",
                    div { class: "spinner", role: "progressbar", aria_label: "loading" }
                    p {
                        class: "text-sm mt-2 font-semibold text-orange-500",
                        "Adding Category Hold Tight ...."
                    }
                }
            } else {
                div {
                    class: "w-full h-full flex items-start justify-center",
                    form {
                        class: "w-full max-w-lg py-2 flex-col",
                        onsubmit: handle_submit,

                        div {
                            class: "form-control w-full mb-2",
                            label { class: "label", span { class: "label-text", "{name_label}" } }
                            input {
                                id: "category-name",
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "Type here",
                                value: form.read().name.clone(),
                                oninput: move |evt: FormEvent| edit(Field::Name, evt.value()),
                            }
                            FieldError { errors: errors(), field: Field::Name }
                        }

                        div {
                            class: "form-control w-full mb-2",
                            label { class: "label", span { class: "label-text", "{slug_label}" } }
                            input {
                                id: "category-slug",
                                class: "input input-bordered w-full",
                                r#type: "text",
                                placeholder: "Type here",
                                value: form.read().slug.clone(),
                                oninput: move |evt: FormEvent| edit(Field::Slug, evt.value()),
                            }
                            FieldError { errors: errors(), field: Field::Slug }
                        }

                        div {
                            class: "form-control",
                            label { class: "label", span { class: "label-text", "{description_label}" } }
                            textarea {
                                id: "category-description",
                                class: "textarea textarea-bordered h-24",
                                placeholder: "Description",
                                value: form.read().description.clone(),
                                oninput: move |evt: FormEvent| edit(Field::Description, evt.value()),
                            }
                            FieldError { errors: errors(), field: Field::Description }
                        }

                        div {
                            class: "form-control w-full",
                            label { class: "label", span { class: "label-text", "{image_label}" } }
                            input {
                                id: "category-image",
                                class: "file-input file-input-bordered w-full",
                                r#type: "file",
                                accept: "image/*",
                                onchange: move |evt: FormEvent| async move {
                                    let mut image = None;
                                    if let Some(file) = evt.files().into_iter().next() {
                                        match file.read_bytes().await {
                                            Ok(bytes) => {
                                                image = Some(ImageFile::new(
                                                    file.name(),
                                                    file.content_type(),
                                                    bytes.to_vec(),
                                                ));
                                            }
                                            Err(e) => tracing::error!("Failed to read {}: {}", file.name(), e),
                                        }
                                    }
                                    if image.is_some() {
                                        errors.write().clear(Field::Image);
                                    }
                                    form.write().image = image;
                                },
                            }
                            FieldError { errors: errors(), field: Field::Image }
                        }

                        button { class: "btn btn-block mt-3", r#type: "submit", "Done !" }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldError(errors: FieldErrors, field: Field) -> Element {
    match errors.message(field) {
        Some(message) => rsx! {
            span { class: "text-red-500 text-xs mt-2", "{message}" }
        },
        None => rsx! {},
    }
}
