//! Manage Contacts: add form, member grid, edit modal, confirmed delete.

use dioxus::prelude::*;

use domain::models::PanchayatRole;
use domain::validate;
use ui::{
    friendly_error, mutate_then_reload, read_first_file, use_toasts, ConfirmDialog, SelectedFile,
};

use super::AdminShell;

#[component]
pub fn AdminContacts() -> Element {
    let toasts = use_toasts();
    let mut members = use_resource(move || async move { api::list_contacts().await });

    // Add form
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| Option::<PanchayatRole>::None);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut photo = use_signal(|| Option::<SelectedFile>::None);
    let mut adding = use_signal(|| false);

    // Edit modal
    let mut edit_id = use_signal(|| Option::<String>::None);
    let mut edit_name = use_signal(String::new);
    let mut edit_role = use_signal(|| PanchayatRole::WardMember);
    let mut edit_phone = use_signal(String::new);
    let mut edit_email = use_signal(String::new);
    let mut edit_photo = use_signal(|| Option::<SelectedFile>::None);
    let mut saving = use_signal(|| false);

    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if name().trim().is_empty() {
                toasts.error("Name is required");
                return;
            }
            let Some(selected_role) = role() else {
                toasts.error("Please select a role");
                return;
            };
            if let Err(msg) = validate::validate_mobile(phone().trim()) {
                toasts.error(msg);
                return;
            }

            adding.set(true);
            let upload = photo().map(|f| f.to_upload("photo"));
            let result = mutate_then_reload(
                || api::create_contact(name(), selected_role, phone(), email(), upload),
                || async move {
                    members.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success("🎉 Member added");
                    name.set(String::new());
                    role.set(None);
                    phone.set(String::new());
                    email.set(String::new());
                    photo.set(None);
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            adding.set(false);
        });
    };

    let handle_save = move |_| {
        spawn(async move {
            let Some(id) = edit_id() else { return };
            if edit_name().trim().is_empty() {
                toasts.error("Name is required");
                return;
            }
            if let Err(msg) = validate::validate_mobile(edit_phone().trim()) {
                toasts.error(msg);
                return;
            }

            saving.set(true);
            let upload = edit_photo().map(|f| f.to_upload("photo"));
            let result = mutate_then_reload(
                || api::update_contact(id, edit_name(), edit_role(), edit_phone(), edit_email(), upload),
                || async move {
                    members.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success("✨ Member updated");
                    edit_id.set(None);
                    edit_photo.set(None);
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            saving.set(false);
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_contact(id),
                || async move {
                    members.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("🗑️ Member removed"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Contacts",

            div {
                class: "form-container",
                h3 { "➕ Add Member" }
                form {
                    class: "admin-form",
                    onsubmit: handle_add,

                    input {
                        r#type: "text",
                        placeholder: "Full Name",
                        value: name(),
                        disabled: adding(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }

                    select {
                        value: role().map(|r| r.as_str()).unwrap_or(""),
                        disabled: adding(),
                        onchange: move |evt: FormEvent| role.set(evt.value().parse().ok()),
                        option { value: "", "Select Role" }
                        for position in PanchayatRole::ALL {
                            option {
                                value: position.as_str(),
                                selected: role() == Some(position),
                                "{position}"
                            }
                        }
                    }

                    input {
                        r#type: "tel",
                        placeholder: "Phone",
                        value: phone(),
                        disabled: adding(),
                        oninput: move |evt: FormEvent| phone.set(evt.value()),
                    }

                    input {
                        r#type: "email",
                        placeholder: "Email (optional)",
                        value: email(),
                        disabled: adding(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled: adding(),
                        onchange: move |evt: FormEvent| {
                            spawn(async move {
                                photo.set(read_first_file(&evt).await);
                            });
                        },
                    }
                    if let Some(file) = photo() {
                        span { class: "file-ok", "✅ {file.name}" }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: adding(),
                        if adding() { "Adding..." } else { "Add Member" }
                    }
                }
            }

            h3 { class: "section-title", "👥 Members" }
            match members() {
                None => rsx! {
                    p { class: "loading-text", "Loading members..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "No members listed yet" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "member-grid",
                        for member in list {
                            div {
                                class: "member-card",
                                if let Some(url) = member.photo.clone() {
                                    img { class: "member-photo", src: "{url}" }
                                } else {
                                    div { class: "member-photo placeholder", "👤" }
                                }
                                h4 { "{member.name}" }
                                p { class: "member-role", "{member.role}" }
                                p { "📱 {member.phone}" }

                                div {
                                    class: "card-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let member = member.clone();
                                            move |_| {
                                                edit_id.set(Some(member.id.clone()));
                                                edit_name.set(member.name.clone());
                                                edit_role.set(member.role);
                                                edit_phone.set(member.phone.clone());
                                                edit_email.set(member.email.clone().unwrap_or_default());
                                                edit_photo.set(None);
                                            }
                                        },
                                        "✏️ Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = member.id.clone();
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

                        h3 { "✏️ Edit Member" }

                        label { "Name" }
                        input {
                            r#type: "text",
                            value: edit_name(),
                            disabled: saving(),
                            oninput: move |evt: FormEvent| edit_name.set(evt.value()),
                        }

                        label { "Role" }
                        select {
                            value: edit_role().as_str(),
                            disabled: saving(),
                            onchange: move |evt: FormEvent| {
                                if let Ok(position) = evt.value().parse() {
                                    edit_role.set(position);
                                }
                            },
                            for position in PanchayatRole::ALL {
                                option {
                                    value: position.as_str(),
                                    selected: edit_role() == position,
                                    "{position}"
                                }
                            }
                        }

                        label { "Phone" }
                        input {
                            r#type: "tel",
                            value: edit_phone(),
                            disabled: saving(),
                            oninput: move |evt: FormEvent| edit_phone.set(evt.value()),
                        }

                        label { "Email" }
                        input {
                            r#type: "email",
                            value: edit_email(),
                            disabled: saving(),
                            oninput: move |evt: FormEvent| edit_email.set(evt.value()),
                        }

                        label { "New photo (optional, replaces the current one)" }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            disabled: saving(),
                            onchange: move |evt: FormEvent| {
                                spawn(async move {
                                    edit_photo.set(read_first_file(&evt).await);
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
                    title: "Remove member?",
                    message: "The member will disappear from the public contact directory.",
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
