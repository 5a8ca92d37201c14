//! Application status view: the citizen's applications with the decision
//! and any remark from the office.

use dioxus::prelude::*;

use domain::models::ApplicationStatus;
use ui::{application_status_class, friendly_error, RequireAuth, StatusBadge};

use crate::Route;

#[component]
pub fn MyApplications() -> Element {
    rsx! {
        RequireAuth {
            ApplicationList {}
        }
    }
}

#[component]
fn ApplicationList() -> Element {
    let nav = use_navigator();
    let applications = use_resource(move || async move { api::my_applications().await });

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "📄 Application Status" }

            match applications() {
                None => rsx! {
                    p { class: "loading-text", "Loading applications..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div {
                        class: "empty-state",
                        p { "You have not applied for any service yet" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| { nav.push(Route::Services {}); },
                            "Browse Services"
                        }
                    }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "applications-list",
                        for app in list {
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

                                p { b { "Applicant: " } "{app.full_name}" }
                                p { b { "Mobile: " } "{app.mobile}" }
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

                                if let Some(remark) = app.admin_remark.clone() {
                                    p {
                                        class: "remark",
                                        b {
                                            if app.status == ApplicationStatus::Approved { "Message: " } else { "Reason: " }
                                        }
                                        "{remark}"
                                    }
                                }

                                if app.status == ApplicationStatus::Rejected {
                                    button {
                                        class: "btn btn-primary",
                                        onclick: {
                                            let service = app.service_type;
                                            move |_| {
                                                nav.push(Route::ApplyServicePage {
                                                    service: service.as_str().to_string(),
                                                });
                                            }
                                        },
                                        "🔁 Re-Apply"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
