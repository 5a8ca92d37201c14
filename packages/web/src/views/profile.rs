//! Citizen profile: account details plus every submitted application, with
//! re-apply for rejected ones and withdrawal of still-pending ones.

use dioxus::prelude::*;

use domain::models::ApplicationStatus;
use ui::{
    application_status_class, friendly_error, mutate_then_reload, use_toasts, ConfirmDialog,
    RequireAuth, StatusBadge,
};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfileContent {}
        }
    }
}

#[component]
fn ProfileContent() -> Element {
    let nav = use_navigator();
    let toasts = use_toasts();
    let mut profile = use_resource(move || async move { api::get_profile().await });
    let mut confirm_withdraw = use_signal(|| Option::<String>::None);

    let handle_withdraw = move |id: String| {
        spawn(async move {
            let result = mutate_then_reload(
                || api::delete_application(id),
                || async move {
                    profile.restart();
                },
            )
            .await;

            match result {
                Ok(()) => toasts.success("Application withdrawn"),
                Err(err) => toasts.error(friendly_error(&err)),
            }
        });
    };

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "👤 My Profile" }

            match profile() {
                None => rsx! {
                    p { class: "loading-text", "Loading profile..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(data)) => rsx! {
                    div {
                        class: "profile-card",
                        p { b { "Name: " } "{data.user.full_name}" }
                        p { b { "Email: " } "{data.user.email}" }
                        p { b { "Mobile: " } {data.user.mobile.clone().unwrap_or_else(|| "N/A".to_string())} }
                        p { b { "Village: " } {data.user.village.clone().unwrap_or_else(|| "N/A".to_string())} }
                        p {
                            b { "Member since: " }
                            {data.user.created_at.format("%d %b %Y").to_string()}
                        }
                    }

                    h3 { class: "section-title", "My Applications" }

                    if data.applications.is_empty() {
                        p { class: "no-data", "No applications submitted yet" }
                    }

                    div {
                        class: "applications-list",
                        for app in data.applications {
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
                                p {
                                    class: "application-date",
                                    "Submitted " {app.created_at.format("%d %b %Y").to_string()}
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

                                div {
                                    class: "user-actions",
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
                                    if app.status == ApplicationStatus::Pending {
                                        button {
                                            class: "btn btn-danger",
                                            onclick: {
                                                let id = app.id.clone();
                                                move |_| confirm_withdraw.set(Some(id.clone()))
                                            },
                                            "Withdraw"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(id) = confirm_withdraw() {
                ConfirmDialog {
                    title: "Withdraw application?",
                    message: "The application and its uploaded documents will be removed.",
                    confirm_label: "Withdraw",
                    on_confirm: move |_| {
                        confirm_withdraw.set(None);
                        handle_withdraw(id.clone());
                    },
                    on_cancel: move |_| confirm_withdraw.set(None),
                }
            }
        }
    }
}
