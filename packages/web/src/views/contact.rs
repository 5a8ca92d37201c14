use dioxus::prelude::*;

use ui::{friendly_error, use_auth};

use crate::Route;

/// Public contact directory of Panchayat members, with a pointer to the
/// complaint form for logged-in citizens.
#[component]
pub fn Contact() -> Element {
    let members = use_resource(move || async move { api::list_contacts().await });
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "📞 Contact Directory" }
            p { class: "page-subtitle", "Reach the Panchayat members directly" }

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
                                if let Some(photo) = member.photo {
                                    img { class: "member-photo", src: "{photo}", alt: "{member.name}" }
                                } else {
                                    div { class: "member-photo placeholder", "👤" }
                                }
                                h4 { "{member.name}" }
                                p { class: "member-role", "{member.role}" }
                                p { a { href: "tel:{member.phone}", "📱 {member.phone}" } }
                                if let Some(email) = member.email {
                                    p { a { href: "mailto:{email}", "✉️ {email}" } }
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "contact-complaint",
                h3 { "Have a civic problem?" }
                if auth().is_logged_in() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| { nav.push(Route::SubmitComplaint {}); },
                        "File a Complaint"
                    }
                } else {
                    p { "Log in to file a complaint with the office." }
                }
            }
        }
    }
}
