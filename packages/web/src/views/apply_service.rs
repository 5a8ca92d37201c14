//! The service-application workflow: a dynamic multi-document form whose
//! required file set follows the selected service. Fields validate on blur,
//! everything validates again on submit, and all failures surface together.

use std::collections::{BTreeMap, BTreeSet};

use dioxus::prelude::*;

use domain::services::{required_documents, ApplicationDraft, DocumentUpload, ServiceType};
use domain::validate;
use ui::{
    friendly_error, is_auth_error, read_first_file, redirect_to, use_auth, use_toasts, AuthState,
    RequireAuth, SelectedFile,
};

/// Form field keys that are not document slots.
const APPLICANT_FIELDS: [&str; 5] = ["fullName", "address", "mobile", "deceasedName", "dateOfDeath"];

#[component]
pub fn ApplyServicePage(service: String) -> Element {
    // A service handed over in the query locks the selector.
    let locked = service.parse::<ServiceType>().ok();

    rsx! {
        RequireAuth {
            ApplyServiceForm { locked }
        }
    }
}

#[component]
fn ApplyServiceForm(locked: Option<ServiceType>) -> Element {
    let mut auth = use_auth();
    let toasts = use_toasts();

    let mut service_type = use_signal(|| locked);
    let mut full_name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut deceased_name = use_signal(String::new);
    let mut date_of_death = use_signal(String::new);

    let mut files = use_signal(BTreeMap::<String, SelectedFile>::new);
    let mut errors = use_signal(BTreeMap::<String, String>::new);
    let mut touched = use_signal(BTreeSet::<String>::new);
    let mut submitting = use_signal(|| false);

    // Blur validation for one applicant field.
    let mut check_field = move |key: &str, result: Result<(), String>| {
        touched.write().insert(key.to_string());
        match result {
            Ok(()) => {
                errors.write().remove(key);
            }
            Err(msg) => {
                errors.write().insert(key.to_string(), msg);
            }
        }
    };

    let field_error = move |key: &str| -> Option<String> {
        if touched().contains(key) {
            errors().get(key).cloned()
        } else {
            None
        }
    };

    let handle_service_change = move |evt: FormEvent| {
        let next = evt.value().parse::<ServiceType>().ok();
        service_type.set(next);
        // Picked files and their flags belong to the previous document set.
        files.set(BTreeMap::new());
        let mut map = errors.write();
        map.retain(|key, _| APPLICANT_FIELDS.contains(&key.as_str()));
        let mut seen = touched.write();
        seen.retain(|key| APPLICANT_FIELDS.contains(&key.as_str()));
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(selected) = service_type() else {
                toasts.error("Please select a service");
                return;
            };

            let draft = ApplicationDraft {
                service_type: selected,
                full_name: full_name(),
                address: address(),
                mobile: mobile(),
                deceased_name: deceased_name(),
                date_of_death: date_of_death(),
            };

            let metas = files()
                .iter()
                .map(|(key, file)| (key.clone(), file.meta()))
                .collect();
            let today = chrono::Utc::now().date_naive();

            let validation = validate::validate_draft(&draft, &metas, today);
            if !validation.is_empty() {
                // Mark every relevant field touched so each failure shows.
                let mut seen = touched.write();
                for key in APPLICANT_FIELDS {
                    seen.insert(key.to_string());
                }
                for spec in required_documents(selected) {
                    seen.insert(spec.key.to_string());
                }
                drop(seen);
                errors.set(validation);
                toasts.error("Please fix the highlighted fields");
                return;
            }

            submitting.set(true);

            let documents: Vec<DocumentUpload> = required_documents(selected)
                .iter()
                .filter_map(|spec| files().get(spec.key).map(|f| f.to_upload(spec.key)))
                .collect();

            match api::apply_service(draft, documents).await {
                Ok(_) => {
                    toasts.success("Application submitted successfully");
                    // Back to the initial state; a locked service stays.
                    service_type.set(locked);
                    full_name.set(String::new());
                    address.set(String::new());
                    mobile.set(String::new());
                    deceased_name.set(String::new());
                    date_of_death.set(String::new());
                    files.set(BTreeMap::new());
                    errors.set(BTreeMap::new());
                    touched.set(BTreeSet::new());
                }
                Err(err) => {
                    if is_auth_error(&err) {
                        auth.set(AuthState {
                            user: None,
                            loading: false,
                        });
                        redirect_to("/login");
                    } else {
                        toasts.error(friendly_error(&err));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "page-section apply-service",
            h2 { class: "page-title", "Apply for Service" }

            form {
                class: "apply-form",
                onsubmit: handle_submit,

                label { "Service" }
                select {
                    value: service_type().map(|s| s.as_str()).unwrap_or(""),
                    disabled: locked.is_some(),
                    onchange: handle_service_change,
                    option { value: "", "Select Service" }
                    for kind in ServiceType::ALL {
                        option {
                            value: kind.as_str(),
                            selected: service_type() == Some(kind),
                            "{kind}"
                        }
                    }
                }

                h4 { "Applicant Details" }

                input {
                    r#type: "text",
                    placeholder: "Full Name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    onblur: move |_| check_field("fullName", validate::validate_full_name(&full_name())),
                }
                if let Some(msg) = field_error("fullName") {
                    p { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Address",
                    value: address(),
                    oninput: move |evt: FormEvent| address.set(evt.value()),
                    onblur: move |_| check_field("address", validate::validate_address(&address())),
                }
                if let Some(msg) = field_error("address") {
                    p { class: "field-error", "{msg}" }
                }

                input {
                    r#type: "tel",
                    placeholder: "Mobile Number",
                    value: mobile(),
                    oninput: move |evt: FormEvent| mobile.set(evt.value()),
                    onblur: move |_| check_field("mobile", validate::validate_mobile(&mobile())),
                }
                if let Some(msg) = field_error("mobile") {
                    p { class: "field-error", "{msg}" }
                }

                if service_type().map(|s| s.needs_deceased_details()).unwrap_or(false) {
                    h4 { "Deceased Details" }

                    input {
                        r#type: "text",
                        placeholder: "Deceased Name",
                        value: deceased_name(),
                        oninput: move |evt: FormEvent| deceased_name.set(evt.value()),
                        onblur: move |_| {
                            check_field("deceasedName", validate::validate_deceased_name(&deceased_name()))
                        },
                    }
                    if let Some(msg) = field_error("deceasedName") {
                        p { class: "field-error", "{msg}" }
                    }

                    input {
                        r#type: "date",
                        value: date_of_death(),
                        oninput: move |evt: FormEvent| date_of_death.set(evt.value()),
                        onblur: move |_| {
                            let today = chrono::Utc::now().date_naive();
                            check_field(
                                "dateOfDeath",
                                validate::validate_date_of_death(&date_of_death(), today),
                            )
                        },
                    }
                    if let Some(msg) = field_error("dateOfDeath") {
                        p { class: "field-error", "{msg}" }
                    }
                }

                if let Some(selected) = service_type() {
                    h4 { "Required Documents" }
                    p { class: "form-hint", "JPEG, PNG or PDF, up to 2 MB each" }

                    for spec in required_documents(selected) {
                        div {
                            class: "document-field",
                            label { "{spec.label}" }
                            input {
                                r#type: "file",
                                accept: ".jpg,.jpeg,.png,.pdf",
                                onchange: move |evt: FormEvent| {
                                    spawn(async move {
                                        touched.write().insert(spec.key.to_string());
                                        match read_first_file(&evt).await {
                                            Some(file) => match validate::validate_document_file(&file.meta()) {
                                                Ok(()) => {
                                                    errors.write().remove(spec.key);
                                                    files.write().insert(spec.key.to_string(), file);
                                                }
                                                Err(msg) => {
                                                    files.write().remove(spec.key);
                                                    errors.write().insert(spec.key.to_string(), msg);
                                                }
                                            },
                                            None => {
                                                files.write().remove(spec.key);
                                                errors.write().insert(
                                                    spec.key.to_string(),
                                                    format!("{} is required", spec.label),
                                                );
                                            }
                                        }
                                    });
                                },
                            }
                            if let Some(file) = files().get(spec.key) {
                                span { class: "file-ok", "✅ {file.name}" }
                            }
                            if let Some(msg) = field_error(spec.key) {
                                p { class: "field-error", "{msg}" }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit Application" }
                }
            }
        }
    }
}
