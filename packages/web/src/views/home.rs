use dioxus::prelude::*;

use domain::{sort_notices, ServiceType};
use ui::friendly_error;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let notices = use_resource(move || async move { api::list_notices().await });

    rsx! {
        section {
            class: "hero",
            h1 { "Welcome to the Gram Panchayat Portal" }
            p {
                class: "hero-subtitle",
                "Notices, schemes, development works and certificate services for every villager, in one place."
            }
            div {
                class: "hero-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| { nav.push(Route::Services {}); },
                    "Apply for a Service"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| { nav.push(Route::Notices {}); },
                    "View Notices"
                }
            }
        }

        section {
            class: "page-section",
            h2 { class: "section-title", "📌 Latest Notices" }

            match notices() {
                None => rsx! {
                    p { class: "loading-text", "Loading notices..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "no-data", "No notices published yet" }
                },
                Some(Ok(mut list)) => {
                    sort_notices(&mut list);
                    list.truncate(3);
                    rsx! {
                        div {
                            class: "notice-list",
                            for notice in list {
                                div {
                                    class: if notice.is_important { "notice-card important" } else { "notice-card" },
                                    if notice.is_important {
                                        span { class: "important-badge", "⚠️ Important" }
                                    }
                                    h4 { class: "notice-title", "{notice.title}" }
                                    p { class: "notice-description", "{notice.description}" }
                                    span {
                                        class: "notice-date",
                                        {notice.created_at.format("%d %b %Y").to_string()}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            class: "page-section",
            h2 { class: "section-title", "🏛️ Certificate Services" }
            div {
                class: "services-teaser",
                for service in ServiceType::ALL {
                    div {
                        class: "service-chip",
                        onclick: move |_| {
                            nav.push(Route::ApplyServicePage {
                                service: service.as_str().to_string(),
                            });
                        },
                        "{service}"
                    }
                }
            }
        }
    }
}
