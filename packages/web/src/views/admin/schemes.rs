//! Manage Schemes: one form doubles as create and edit (an id swaps the
//! create call for the update call), plus the card list with confirmed
//! delete.

use dioxus::prelude::*;

use domain::models::{SchemeInput, SchemeType};
use ui::{friendly_error, mutate_then_reload, use_toasts, ConfirmDialog};

use super::AdminShell;

#[component]
pub fn AdminSchemes() -> Element {
    let toasts = use_toasts();
    let mut schemes = use_resource(move || async move { api::list_schemes().await });

    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut form = use_signal(SchemeInput::default);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let mut reset_form = move || {
        editing_id.set(None);
        form.set(SchemeInput::default());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let input = form();
            if input.title.trim().is_empty() || input.description.trim().is_empty() {
                toasts.error("Title and description are required");
                return;
            }

            saving.set(true);
            let result = mutate_then_reload(
                || async {
                    match editing_id() {
                        Some(id) => api::update_scheme(id, input).await,
                        None => api::create_scheme(input).await,
                    }
                },
                || async move {
                    schemes.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success(if editing_id().is_some() {
                        "✨ Scheme updated"
                    } else {
                        "🎉 Scheme added"
                    });
                    reset_form();
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_scheme(id),
                || async move {
                    schemes.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("🗑️ Scheme deleted"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Schemes",

            div {
                class: "form-container",
                h3 {
                    if editing_id().is_some() { "✏️ Edit Scheme" } else { "➕ Add New Scheme" }
                }
                form {
                    class: "admin-form",
                    onsubmit: handle_submit,

                    label { "Title *" }
                    input {
                        r#type: "text",
                        placeholder: "Scheme title",
                        value: form().title,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().title = evt.value(),
                    }

                    label { "Description *" }
                    textarea {
                        rows: 3,
                        placeholder: "What the scheme provides",
                        value: form().description,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }

                    label { "Benefits" }
                    textarea {
                        rows: 2,
                        value: form().benefits,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().benefits = evt.value(),
                    }

                    label { "Eligibility" }
                    textarea {
                        rows: 2,
                        value: form().eligibility,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().eligibility = evt.value(),
                    }

                    label { "How to apply" }
                    textarea {
                        rows: 2,
                        value: form().apply_process,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().apply_process = evt.value(),
                    }

                    label { "Application link" }
                    input {
                        r#type: "url",
                        placeholder: "https://...",
                        value: form().apply_link,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().apply_link = evt.value(),
                    }

                    label { "Scheme type" }
                    select {
                        value: form().scheme_type.as_str(),
                        disabled: saving(),
                        onchange: move |evt: FormEvent| {
                            if let Ok(kind) = evt.value().parse::<SchemeType>() {
                                form.write().scheme_type = kind;
                            }
                        },
                        for kind in SchemeType::ALL {
                            option {
                                value: kind.as_str(),
                                selected: form().scheme_type == kind,
                                "{kind}"
                            }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() {
                                "Saving..."
                            } else if editing_id().is_some() {
                                "💾 Save Changes"
                            } else {
                                "Add Scheme"
                            }
                        }
                        if editing_id().is_some() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| reset_form(),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            h3 { class: "section-title", "🌾 All Schemes" }
            match schemes() {
                None => rsx! {
                    p { class: "loading-text", "Loading schemes..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "No schemes yet" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for scheme in list {
                            div {
                                class: "scheme-card",
                                span { class: "scheme-type", "{scheme.scheme_type}" }
                                h4 { "{scheme.title}" }
                                p { "{scheme.description}" }

                                div {
                                    class: "card-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let scheme = scheme.clone();
                                            move |_| {
                                                editing_id.set(Some(scheme.id.clone()));
                                                form.set(SchemeInput {
                                                    title: scheme.title.clone(),
                                                    description: scheme.description.clone(),
                                                    benefits: scheme.benefits.clone(),
                                                    eligibility: scheme.eligibility.clone(),
                                                    apply_process: scheme.apply_process.clone(),
                                                    apply_link: scheme.apply_link.clone(),
                                                    scheme_type: scheme.scheme_type,
                                                });
                                            }
                                        },
                                        "✏️ Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = scheme.id.clone();
                                            move |_| confirm_delete.set(Some(id.clone()))
                                        },
                                        "🗑️ Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_delete() {
                ConfirmDialog {
                    title: "Delete scheme?",
                    message: "The scheme will no longer be listed on the public page.",
                    on_confirm: move |_| {
                        confirm_delete.set(None);
                        handle_delete(id.clone());
                    },
                    on_cancel: move |_| confirm_delete.set(None),
                }
            }
        }
    }
}
