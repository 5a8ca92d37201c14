//! Citizen complaint form. The submitter's name and email come from the
//! session on the server side.

use dioxus::prelude::*;

use domain::models::COMPLAINT_CATEGORIES;
use domain::validate;
use ui::{friendly_error, read_first_file, use_toasts, RequireAuth, SelectedFile};

#[component]
pub fn SubmitComplaint() -> Element {
    rsx! {
        RequireAuth {
            ComplaintForm {}
        }
    }
}

#[component]
fn ComplaintForm() -> Element {
    let toasts = use_toasts();

    let mut title = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut attachment = use_signal(|| Option::<SelectedFile>::None);
    let mut file_error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_file = move |evt: FormEvent| {
        spawn(async move {
            match read_first_file(&evt).await {
                Some(file) => match validate::validate_document_file(&file.meta()) {
                    Ok(()) => {
                        file_error.set(None);
                        attachment.set(Some(file));
                    }
                    Err(msg) => {
                        attachment.set(None);
                        file_error.set(Some(msg));
                    }
                },
                None => {
                    attachment.set(None);
                    file_error.set(None);
                }
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            if title().trim().is_empty() {
                toasts.error("Title is required");
                return;
            }
            if category().trim().is_empty() {
                toasts.error("Please choose a category");
                return;
            }
            if description().trim().is_empty() {
                toasts.error("Please describe the problem");
                return;
            }
            if file_error().is_some() {
                toasts.error("Please fix the attachment first");
                return;
            }

            submitting.set(true);

            let upload = attachment().map(|f| f.to_upload("attachment"));
            match api::submit_complaint(title(), category(), description(), upload).await {
                Ok(_) => {
                    toasts.success("Complaint submitted. The office will respond soon.");
                    title.set(String::new());
                    category.set(String::new());
                    description.set(String::new());
                    attachment.set(None);
                    file_error.set(None);
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "📣 File a Complaint" }
            p { class: "page-subtitle", "Report a civic problem to the Panchayat office" }

            form {
                class: "complaint-form",
                onsubmit: handle_submit,

                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "Short summary of the problem",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                label { "Category" }
                select {
                    value: category(),
                    onchange: move |evt: FormEvent| category.set(evt.value()),
                    option { value: "", "Select Category" }
                    for name in COMPLAINT_CATEGORIES {
                        option { value: name, "{name}" }
                    }
                }

                label { "Description" }
                textarea {
                    rows: 6,
                    placeholder: "Describe the problem, the location, and since when it has existed",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }

                label { "Attachment (optional)" }
                input {
                    r#type: "file",
                    accept: ".jpg,.jpeg,.png,.pdf",
                    onchange: handle_file,
                }
                if let Some(file) = attachment() {
                    span { class: "file-ok", "✅ {file.name}" }
                }
                if let Some(msg) = file_error() {
                    p { class: "field-error", "{msg}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit Complaint" }
                }
            }
        }
    }
}
