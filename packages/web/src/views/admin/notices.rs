//! Manage Notices: add form, card list, edit modal, confirmed delete.
//! Every mutation awaits completion and then refetches the list.

use dioxus::prelude::*;

use ui::{
    friendly_error, mutate_then_reload, read_first_file, use_toasts, ConfirmDialog, SelectedFile,
};

use super::AdminShell;

#[component]
pub fn AdminNotices() -> Element {
    let toasts = use_toasts();
    let mut notices = use_resource(move || async move { api::list_notices().await });

    // Add form
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut is_important = use_signal(|| false);
    let mut attachment = use_signal(|| Option::<SelectedFile>::None);
    let mut adding = use_signal(|| false);

    // Edit modal
    let mut edit_id = use_signal(|| Option::<String>::None);
    let mut edit_title = use_signal(String::new);
    let mut edit_description = use_signal(String::new);
    let mut edit_important = use_signal(|| false);
    let mut edit_attachment = use_signal(|| Option::<SelectedFile>::None);
    let mut saving = use_signal(|| false);

    // Delete confirmation
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if title().trim().is_empty() || description().trim().is_empty() {
                toasts.error("Title and description are required");
                return;
            }

            adding.set(true);
            let upload = attachment().map(|f| f.to_upload("attachment"));
            let result = mutate_then_reload(
                || api::create_notice(title(), description(), is_important(), upload),
                || async move {
                    notices.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success("🎉 Notice added successfully");
                    title.set(String::new());
                    description.set(String::new());
                    is_important.set(false);
                    attachment.set(None);
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            adding.set(false);
        });
    };

    let handle_save = move |_| {
        spawn(async move {
            let Some(id) = edit_id() else { return };
            if edit_title().trim().is_empty() || edit_description().trim().is_empty() {
                toasts.error("Title and description are required");
                return;
            }

            saving.set(true);
            let upload = edit_attachment().map(|f| f.to_upload("attachment"));
            let result = mutate_then_reload(
                || api::update_notice(id, edit_title(), edit_description(), edit_important(), upload),
                || async move {
                    notices.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success("✨ Notice updated");
                    edit_id.set(None);
                    edit_attachment.set(None);
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_notice(id),
                || async move {
                    notices.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("🗑️ Notice deleted"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Notices",

            div {
                class: "form-container",
                h3 { "➕ Add New Notice" }
                form {
                    class: "admin-form",
                    onsubmit: handle_add,

                    label { "Notice Title *" }
                    input {
                        r#type: "text",
                        placeholder: "Enter notice title",
                        value: title(),
                        disabled: adding(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { "Description *" }
                    textarea {
                        rows: 4,
                        placeholder: "Enter detailed description",
                        value: description(),
                        disabled: adding(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    label {
                        class: "checkbox-label",
                        input {
                            r#type: "checkbox",
                            checked: is_important(),
                            disabled: adding(),
                            onchange: move |evt: FormEvent| is_important.set(evt.checked()),
                        }
                        span { "⭐ Mark as Important" }
                    }

                    label { "Attachment (PDF, JPG, PNG — optional)" }
                    input {
                        r#type: "file",
                        accept: ".pdf,.jpg,.jpeg,.png",
                        disabled: adding(),
                        onchange: move |evt: FormEvent| {
                            spawn(async move {
                                attachment.set(read_first_file(&evt).await);
                            });
                        },
                    }
                    if let Some(file) = attachment() {
                        span { class: "file-ok", "✅ {file.name}" }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: adding(),
                        if adding() { "Adding..." } else { "Add Notice" }
                    }
                }
            }

            h3 { class: "section-title", "📌 All Notices" }
            match notices() {
                None => rsx! {
                    p { class: "loading-text", "Loading notices..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "📭 No notices found. Create your first notice above!" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "notice-list",
                        for notice in list {
                            div {
                                class: if notice.is_important { "notice-card important" } else { "notice-card" },
                                if notice.is_important {
                                    span { class: "important-badge", "⚠️ Important" }
                                }
                                h4 { class: "notice-title", "{notice.title}" }
                                p { class: "notice-description", "{notice.description}" }
                                if let Some(url) = notice.attachment.clone() {
                                    a {
                                        class: "attachment-link",
                                        href: "{url}",
                                        target: "_blank",
                                        "📎 View Attachment"
                                    }
                                }
                                div {
                                    class: "card-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let notice = notice.clone();
                                            move |_| {
                                                edit_id.set(Some(notice.id.clone()));
                                                edit_title.set(notice.title.clone());
                                                edit_description.set(notice.description.clone());
                                                edit_important.set(notice.is_important);
                                                edit_attachment.set(None);
                                            }
                                        },
                                        "✏️ Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = notice.id.clone();
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

            if edit_id().is_some() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| {
                        if !saving() {
                            edit_id.set(None);
                        }
                    },
                    div {
                        class: "modal-box",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        h3 { "✏️ Edit Notice" }

                        label { "Notice Title" }
                        input {
                            r#type: "text",
                            value: edit_title(),
                            disabled: saving(),
                            oninput: move |evt: FormEvent| edit_title.set(evt.value()),
                        }

                        label { "Description" }
                        textarea {
                            rows: 4,
                            value: edit_description(),
                            disabled: saving(),
                            oninput: move |evt: FormEvent| edit_description.set(evt.value()),
                        }

                        label {
                            class: "checkbox-label",
                            input {
                                r#type: "checkbox",
                                checked: edit_important(),
                                disabled: saving(),
                                onchange: move |evt: FormEvent| edit_important.set(evt.checked()),
                            }
                            span { "⭐ Important" }
                        }

                        label { "New Attachment (optional, replaces the current one)" }
                        input {
                            r#type: "file",
                            accept: ".pdf,.jpg,.jpeg,.png",
                            disabled: saving(),
                            onchange: move |evt: FormEvent| {
                                spawn(async move {
                                    edit_attachment.set(read_first_file(&evt).await);
                                });
                            },
                        }

                        div {
                            class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                disabled: saving(),
                                onclick: handle_save,
                                if saving() { "Saving..." } else { "💾 Save Changes" }
                            }
                            button {
                                class: "btn btn-secondary",
                                disabled: saving(),
                                onclick: move |_| edit_id.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_delete() {
                ConfirmDialog {
                    title: "Delete notice?",
                    message: "This notice will be removed from the public notice board.",
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
