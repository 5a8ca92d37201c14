//! Manage Complaints: status filter, detail modal with direct status
//! buttons and the response box, confirmed delete.

use dioxus::prelude::*;

use domain::models::{ComplaintInfo, ComplaintStatus};
use ui::{
    complaint_status_class, friendly_error, mutate_then_reload, use_toasts, ConfirmDialog,
    StatusBadge,
};

use super::AdminShell;

#[component]
pub fn AdminComplaints() -> Element {
    let toasts = use_toasts();
    let mut complaints = use_resource(move || async move { api::list_complaints().await });

    let mut filter = use_signal(|| Option::<ComplaintStatus>::None);
    let mut selected = use_signal(|| Option::<ComplaintInfo>::None);
    let mut response_text = use_signal(String::new);
    let mut confirm_delete = use_signal(|| Option::<String>::None);

    let handle_status = move |id: String, status: ComplaintStatus| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::set_complaint_status(id, status),
                || async move {
                    complaints.restart();
                },
            )
            .await;

            match result {
                Ok(updated) => {
                    selected.set(Some(updated));
                    toasts.success("Status updated");
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    let handle_respond = move |_| {
        spawn(async move {
            let Some(complaint) = selected() else { return };

            if response_text().trim().is_empty() {
                toasts.error("Please enter a response");
                return;
            }

            let result = mutate_then_reload(
                || api::respond_complaint(complaint.id.clone(), response_text()),
                || async move {
                    complaints.restart();
                },
            )
            .await;

            match result {
                Ok(updated) => {
                    selected.set(Some(updated));
                    response_text.set(String::new());
                    toasts.success("Response sent");
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_complaint(id),
                || async move {
                    complaints.restart();
                },
            )
            .await;

            match result {
                Ok(()) => {
                    selected.set(None);
                    toasts.success("🗑️ Complaint deleted");
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        AdminShell {
            title: "Manage Complaints",

            match complaints() {
                None => rsx! {
                    p { class: "loading-text", "Loading complaints..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) => {
                    let total = list.len();
                    let counted: Vec<(ComplaintStatus, usize)> = ComplaintStatus::ALL
                        .iter()
                        .map(|&status| {
                            (status, list.iter().filter(|c| c.status == status).count())
                        })
                        .collect();
                    let visible: Vec<_> = list
                        .iter()
                        .filter(|c| filter().map(|f| c.status == f).unwrap_or(true))
                        .cloned()
                        .collect();
                    rsx! {
                        div {
                            class: "filter-buttons",
                            button {
                                class: if filter().is_none() { "active" } else { "" },
                                onclick: move |_| filter.set(None),
                                "All ({total})"
                            }
                            for (status, count) in counted {
                                button {
                                    class: if filter() == Some(status) { "active" } else { "" },
                                    onclick: move |_| filter.set(Some(status)),
                                    "{status} ({count})"
                                }
                            }
                        }

                        if visible.is_empty() {
                            div { class: "empty-state", p { "No complaints found" } }
                        }

                        div {
                            class: "card-grid",
                            for complaint in visible {
                                div {
                                    class: "complaint-card",
                                    div {
                                        class: "card-header",
                                        h4 { "{complaint.title}" }
                                        StatusBadge {
                                            label: complaint.status.to_string(),
                                            tone: complaint_status_class(complaint.status),
                                        }
                                    }
                                    p { b { "Category: " } "{complaint.category}" }
                                    p { b { "Submitted by: " } "{complaint.user_name}" }
                                    p {
                                        class: "application-date",
                                        {complaint.created_at.format("%d %b %Y").to_string()}
                                    }
                                    p {
                                        class: "complaint-description",
                                        {
                                            let text = &complaint.description;
                                            if text.chars().count() > 100 {
                                                format!("{}...", text.chars().take(100).collect::<String>())
                                            } else {
                                                text.clone()
                                            }
                                        }
                                    }

                                    div {
                                        class: "card-actions",
                                        button {
                                            class: "btn btn-secondary",
                                            onclick: {
                                                let complaint = complaint.clone();
                                                move |_| {
                                                    response_text.set(
                                                        complaint.admin_response.clone().unwrap_or_default(),
                                                    );
                                                    selected.set(Some(complaint.clone()));
                                                }
                                            },
                                            "View Details"
                                        }
                                        button {
                                            class: "btn btn-danger",
                                            onclick: {
                                                let id = complaint.id.clone();
                                                move |_| confirm_delete.set(Some(id.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(complaint) = selected() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| selected.set(None),
                    div {
                        class: "modal-box modal-wide",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        h3 { "Complaint Details" }

                        p { b { "Title: " } "{complaint.title}" }
                        p { b { "Category: " } "{complaint.category}" }
                        p { b { "Submitted by: " } "{complaint.user_name}" }
                        p {
                            b { "Contact: " }
                            {complaint.user_email.clone().unwrap_or_else(|| "N/A".to_string())}
                        }
                        p {
                            b { "Date: " }
                            {complaint.created_at.format("%d %b %Y %H:%M").to_string()}
                        }
                        p { class: "description-text", "{complaint.description}" }

                        if let Some(url) = complaint.attachment.clone() {
                            a {
                                class: "attachment-link",
                                href: "{url}",
                                target: "_blank",
                                "📎 View Attachment"
                            }
                        }

                        div {
                            class: "status-update-section",
                            label { "Update status:" }
                            div {
                                class: "filter-buttons",
                                for status in ComplaintStatus::ALL {
                                    button {
                                        class: if complaint.status == status { "active" } else { "" },
                                        onclick: {
                                            let id = complaint.id.clone();
                                            move |_| handle_status(id.clone(), status)
                                        },
                                        "{status}"
                                    }
                                }
                            }
                        }

                        div {
                            class: "response-section",
                            label { "Admin response:" }
                            textarea {
                                rows: 4,
                                placeholder: "Enter your response to the citizen...",
                                value: response_text(),
                                oninput: move |evt: FormEvent| response_text.set(evt.value()),
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: handle_respond,
                                "Submit Response"
                            }
                        }

                        if let Some(previous) = complaint.admin_response.clone() {
                            p { class: "remark", b { "Previous response: " } "{previous}" }
                        }

                        div {
                            class: "modal-actions",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| selected.set(None),
                                "Close"
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_delete() {
                ConfirmDialog {
                    title: "Delete complaint?",
                    message: "The complaint and its response history will be removed.",
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
