//! Manage Development: project create/edit form (the same form, repurposed
//! with an id) with multi-photo upload, list with confirmed delete.

use dioxus::prelude::*;

use domain::models::{ProjectInput, ProjectStatus};
use domain::validate;
use ui::{
    friendly_error, mutate_then_reload, read_first_file, use_toasts, ConfirmDialog, SelectedFile,
};

use super::AdminShell;

#[component]
pub fn AdminDevelopment() -> Element {
    let toasts = use_toasts();
    let mut projects = use_resource(move || async move { api::list_projects().await });

    let mut editing_id = use_signal(|| Option::<String>::None);
    let mut form = use_signal(ProjectInput::default);
    let mut photos = use_signal(Vec::<SelectedFile>::new);
    let mut photo_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let mut reset_form = move || {
        editing_id.set(None);
        form.set(ProjectInput::default());
        photos.set(Vec::new());
        photo_error.set(None);
    };

    let handle_pick = move |evt: FormEvent| {
        spawn(async move {
            match read_first_file(&evt).await {
                Some(file) => match validate::validate_document_file(&file.meta()) {
                    Ok(()) => {
                        photo_error.set(None);
                        photos.write().push(file);
                    }
                    Err(msg) => photo_error.set(Some(msg)),
                },
                None => photo_error.set(None),
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let input = form();
            if input.name.trim().is_empty() {
                toasts.error("Project name is required");
                return;
            }

            saving.set(true);
            let uploads: Vec<_> = photos()
                .iter()
                .map(|f| f.to_upload("images"))
                .collect();
            let result = mutate_then_reload(
                || async {
                    match editing_id() {
                        Some(id) => api::update_project(id, input, uploads).await,
                        None => api::create_project(input, uploads).await,
                    }
                },
                || async move {
                    projects.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success(if editing_id().is_some() {
                        "✨ Project updated"
                    } else {
                        "🎉 Project added"
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
                || api::delete_project(id),
                || async move {
                    projects.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("🗑️ Project deleted"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Development Works",

            div {
                class: "form-container",
                h3 {
                    if editing_id().is_some() { "✏️ Edit Project" } else { "➕ Add New Project" }
                }
                form {
                    class: "admin-form",
                    onsubmit: handle_submit,

                    label { "Project name *" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. Main road concretisation",
                        value: form().name,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }

                    label { "Description" }
                    textarea {
                        rows: 3,
                        value: form().description,
                        disabled: saving(),
                        oninput: move |evt: FormEvent| form.write().description = evt.value(),
                    }

                    label { "Progress (%)" }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "100",
                        value: "{form().progress}",
                        disabled: saving(),
                        oninput: move |evt: FormEvent| {
                            if let Ok(value) = evt.value().parse::<u8>() {
                                form.write().progress = value.min(100);
                            }
                        },
                    }

                    label { "Funds used (₹)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{form().funds_used}",
                        disabled: saving(),
                        oninput: move |evt: FormEvent| {
                            if let Ok(value) = evt.value().parse::<f64>() {
                                form.write().funds_used = value.max(0.0);
                            }
                        },
                    }

                    label { "Status" }
                    select {
                        value: form().status.as_str(),
                        disabled: saving(),
                        onchange: move |evt: FormEvent| {
                            if let Ok(status) = evt.value().parse::<ProjectStatus>() {
                                form.write().status = status;
                            }
                        },
                        for status in ProjectStatus::ALL {
                            option {
                                value: status.as_str(),
                                selected: form().status == status,
                                "{status}"
                            }
                        }
                    }

                    label { "Add photo (JPEG/PNG, repeat to add several)" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled: saving(),
                        onchange: handle_pick,
                    }
                    if !photos().is_empty() {
                        {
                            let ready = photos().len();
                            rsx! {
                                span {
                                    class: "file-ok",
                                    "✅ {ready} photo(s) ready to upload"
                                }
                            }
                        }
                    }
                    if let Some(msg) = photo_error() {
                        p { class: "field-error", "{msg}" }
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
                                "Add Project"
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

            h3 { class: "section-title", "🚧 All Projects" }
            match projects() {
                None => rsx! {
                    p { class: "loading-text", "Loading projects..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "No projects yet" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "card-grid",
                        for project in list {
                            div {
                                class: "project-card",
                                div {
                                    class: "card-header",
                                    h4 { "{project.name}" }
                                    span { class: "status-badge", "{project.status}" }
                                }
                                div {
                                    class: "progress-track",
                                    div {
                                        class: "progress-fill",
                                        style: "width: {project.progress}%",
                                    }
                                }
                                div {
                                    class: "project-meta",
                                    span { "{project.progress}%" }
                                    span { "₹{project.funds_used}" }
                                }

                                div {
                                    class: "card-actions",
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: {
                                            let project = project.clone();
                                            move |_| {
                                                editing_id.set(Some(project.id.clone()));
                                                form.set(ProjectInput {
                                                    name: project.name.clone(),
                                                    description: project.description.clone(),
                                                    progress: project.progress,
                                                    funds_used: project.funds_used,
                                                    status: project.status,
                                                });
                                                photos.set(Vec::new());
                                            }
                                        },
                                        "✏️ Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = project.id.clone();
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
                    title: "Delete project?",
                    message: "The project and its progress record will be removed.",
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
