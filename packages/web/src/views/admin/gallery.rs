//! Manage Gallery: photo upload with caption/category, grid, confirmed
//! delete.

use dioxus::prelude::*;

use domain::validate;
use ui::{
    friendly_error, mutate_then_reload, read_first_file, use_toasts, ConfirmDialog, SelectedFile,
};

use super::AdminShell;

#[component]
pub fn AdminGallery() -> Element {
    let toasts = use_toasts();
    let mut images = use_resource(move || async move { api::list_gallery().await });

    let mut photo = use_signal(|| Option::<SelectedFile>::None);
    let mut photo_error = use_signal(|| Option::<String>::None);
    let mut caption = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let handle_pick = move |evt: FormEvent| {
        spawn(async move {
            match read_first_file(&evt).await {
                Some(file) => match validate::validate_document_file(&file.meta()) {
                    Ok(()) => {
                        photo_error.set(None);
                        photo.set(Some(file));
                    }
                    Err(msg) => {
                        photo.set(None);
                        photo_error.set(Some(msg));
                    }
                },
                None => {
                    photo.set(None);
                    photo_error.set(None);
                }
            }
        });
    };

    let handle_upload = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(file) = photo() else {
                toasts.error("Choose a photo first");
                return;
            };

            uploading.set(true);
            let result = mutate_then_reload(
                || api::add_gallery_image(file.to_upload("image"), caption(), category()),
                || async move {
                    images.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success("📷 Photo added to the gallery");
                    photo.set(None);
                    caption.set(String::new());
                    category.set(String::new());
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            uploading.set(false);
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_gallery_image(id),
                || async move {
                    images.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("🗑️ Photo removed"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Gallery",

            div {
                class: "form-container",
                h3 { "➕ Upload Photo" }
                form {
                    class: "admin-form",
                    onsubmit: handle_upload,

                    input {
                        r#type: "file",
                        accept: "image/*",
                        disabled: uploading(),
                        onchange: handle_pick,
                    }
                    if let Some(file) = photo() {
                        span { class: "file-ok", "✅ {file.name}" }
                    }
                    if let Some(msg) = photo_error() {
                        p { class: "field-error", "{msg}" }
                    }

                    input {
                        r#type: "text",
                        placeholder: "Caption (optional)",
                        value: caption(),
                        disabled: uploading(),
                        oninput: move |evt: FormEvent| caption.set(evt.value()),
                    }

                    input {
                        r#type: "text",
                        placeholder: "Category (optional)",
                        value: category(),
                        disabled: uploading(),
                        oninput: move |evt: FormEvent| category.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: uploading(),
                        if uploading() { "Uploading..." } else { "Upload" }
                    }
                }
            }

            match images() {
                None => rsx! {
                    p { class: "loading-text", "Loading gallery..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "No photos yet" } }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "gallery-grid",
                        for image in list {
                            figure {
                                class: "gallery-item",
                                img { src: "{image.url}", loading: "lazy" }
                                figcaption {
                                    {image.caption.clone().unwrap_or_default()}
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = image.id.clone();
                                            move |_| confirm_delete.set(Some(id.clone()))
                                        },
                                        "🗑️"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_delete() {
                ConfirmDialog {
                    title: "Remove photo?",
                    message: "The photo will be removed from the public gallery.",
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
