//! Manage service applications: filter tabs by status, document links, and
//! the approve/reject decision modal. The decision remark is mandatory and
//! checked before any request is sent.

use dioxus::prelude::*;

use domain::models::ApplicationStatus;
use ui::{application_status_class, friendly_error, mutate_then_reload, use_toasts, StatusBadge};

use super::AdminShell;

#[component]
pub fn AdminServices() -> Element {
    let toasts = use_toasts();
    let mut applications = use_resource(move || async move { api::admin_list_applications().await });

    let mut active_filter = use_signal(|| ApplicationStatus::Pending);

    // Decision modal state
    let mut decision_id = use_signal(|| Option::<String>::None);
    let mut decision_status = use_signal(|| ApplicationStatus::Approved);
    let mut remark = use_signal(String::new);
    let mut remark_error = use_signal(|| Option::<String>::None);
    let mut deciding = use_signal(|| false);

    let mut open_decision = move |id: String, status: ApplicationStatus| {
        decision_id.set(Some(id));
        decision_status.set(status);
        remark.set(String::new());
        remark_error.set(None);
    };

    let handle_confirm = move |_| {
        spawn(async move {
            let Some(id) = decision_id() else { return };

            // Blocked client-side: no request without a real remark.
            if remark().trim().is_empty() {
                remark_error.set(Some("A message for the applicant is required".to_string()));
                return;
            }

            deciding.set(true);
            let result = mutate_then_reload(
                || api::set_application_status(id, decision_status(), remark()),
                || async move {
                    applications.restart();
                },
            )
            .await;

            match result {
                Ok(_) => {
                    toasts.success(match decision_status() {
                        ApplicationStatus::Approved => "Application approved",
                        _ => "Application rejected",
                    });
                    decision_id.set(None);
                    remark.set(String::new());
                }
                Err(err) => toasts.error(friendly_error(&err)),
            }
            deciding.set(false);
        });
    };

    rsx! {
        AdminShell {
            title: "Service Applications",

            match applications() {
                None => rsx! {
                    p { class: "loading-text", "Loading applications..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) => {
                    let pending = list.iter().filter(|a| a.status == ApplicationStatus::Pending).count();
                    let approved = list.iter().filter(|a| a.status == ApplicationStatus::Approved).count();
                    let rejected = list.iter().filter(|a| a.status == ApplicationStatus::Rejected).count();
                    let visible: Vec<_> = list
                        .iter()
                        .filter(|a| a.status == active_filter())
                        .cloned()
                        .collect();
                    rsx! {
                        div {
                            class: "filter-buttons",
                            button {
                                class: if active_filter() == ApplicationStatus::Pending { "active" } else { "" },
                                onclick: move |_| active_filter.set(ApplicationStatus::Pending),
                                "🕒 Pending ({pending})"
                            }
                            button {
                                class: if active_filter() == ApplicationStatus::Approved { "active" } else { "" },
                                onclick: move |_| active_filter.set(ApplicationStatus::Approved),
                                "✅ Approved ({approved})"
                            }
                            button {
                                class: if active_filter() == ApplicationStatus::Rejected { "active" } else { "" },
                                onclick: move |_| active_filter.set(ApplicationStatus::Rejected),
                                "❌ Rejected ({rejected})"
                            }
                        }

                        if visible.is_empty() {
                            div { class: "empty-state", p { "No applications found" } }
                        }

                        div {
                            class: "card-grid",
                            for app in visible {
                                div {
                                    class: "application-card",
                                    div {
                                        class: "card-header",
                                        h4 { "{app.service_type}" }
                                        StatusBadge {
                                            label: app.status.to_string(),
                                            tone: application_status_class(app.status),
                                        }
                                    }

                                    p { b { "Name: " } "{app.full_name}" }
                                    p { b { "Mobile: " } "{app.mobile}" }
                                    p { b { "Address: " } "{app.address}" }
                                    if let Some(deceased) = app.deceased_name.clone() {
                                        p { b { "Deceased: " } "{deceased}" }
                                    }
                                    if let Some(date) = app.date_of_death {
                                        p { b { "Date of death: " } {date.format("%d %b %Y").to_string()} }
                                    }
                                    p {
                                        class: "application-date",
                                        "Submitted " {app.created_at.format("%d %b %Y").to_string()}
                                    }

                                    div {
                                        class: "documents-list",
                                        for (name, url) in app.documents.clone() {
                                            a {
                                                href: "{url}",
                                                target: "_blank",
                                                "📎 {name}"
                                            }
                                        }
                                    }

                                    if let Some(text) = app.admin_remark.clone() {
                                        p { class: "remark", b { "Remark: " } "{text}" }
                                    }

                                    if app.status == ApplicationStatus::Pending {
                                        div {
                                            class: "card-actions",
                                            button {
                                                class: "btn btn-primary",
                                                onclick: {
                                                    let id = app.id.clone();
                                                    move |_| open_decision(id.clone(), ApplicationStatus::Approved)
                                                },
                                                "Approve"
                                            }
                                            button {
                                                class: "btn btn-danger",
                                                onclick: {
                                                    let id = app.id.clone();
                                                    move |_| open_decision(id.clone(), ApplicationStatus::Rejected)
                                                },
                                                "Reject"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if decision_id().is_some() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| {
                        if !deciding() {
                            decision_id.set(None);
                        }
                    },
                    div {
                        class: "modal-box",
                        onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                        h3 {
                            if decision_status() == ApplicationStatus::Approved {
                                "Approve Application"
                            } else {
                                "Reject Application"
                            }
                        }

                        textarea {
                            rows: 5,
                            placeholder: if decision_status() == ApplicationStatus::Approved {
                                "Your documents are ready. Come to the Panchayat office at 4 PM."
                            } else {
                                "Enter the rejection reason"
                            },
                            value: remark(),
                            disabled: deciding(),
                            oninput: move |evt: FormEvent| {
                                remark.set(evt.value());
                                remark_error.set(None);
                            },
                        }
                        if let Some(msg) = remark_error() {
                            p { class: "field-error", "{msg}" }
                        }

                        div {
                            class: "modal-actions",
                            button {
                                class: "btn btn-primary",
                                disabled: deciding(),
                                onclick: handle_confirm,
                                if deciding() { "Saving..." } else { "Confirm" }
                            }
                            button {
                                class: "btn btn-secondary",
                                disabled: deciding(),
                                onclick: move |_| decision_id.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
