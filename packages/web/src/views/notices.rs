use dioxus::prelude::*;

use domain::sort_notices;
use ui::friendly_error;

#[component]
pub fn Notices() -> Element {
    let notices = use_resource(move || async move { api::list_notices().await });

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "📋 Notice Board" }
            p { class: "page-subtitle", "Official announcements from the Panchayat office" }

            match notices() {
                None => rsx! {
                    p { class: "loading-text", "Loading notices..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "empty-state", p { "📭 No notices found" } }
                },
                Some(Ok(mut list)) => {
                    // Important first, newest first within each group.
                    sort_notices(&mut list);
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

                                    div {
                                        class: "notice-meta",
                                        span {
                                            class: "notice-date",
                                            {notice.created_at.format("%d %b %Y").to_string()}
                                        }
                                        if let Some(url) = notice.attachment {
                                            a {
                                                class: "attachment-link",
                                                href: "{url}",
                                                target: "_blank",
                                                "📎 View Attachment"
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
    }
}
