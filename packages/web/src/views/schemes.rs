use dioxus::prelude::*;

use domain::models::SchemeType;
use ui::friendly_error;

/// Public schemes listing with an in-memory Central/State filter — no
/// server round-trip per filter change.
#[component]
pub fn Schemes() -> Element {
    let schemes = use_resource(move || async move { api::list_schemes().await });
    let mut filter = use_signal(|| Option::<SchemeType>::None);

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "🌾 Government Schemes" }
            p { class: "page-subtitle", "Central and State welfare schemes you can apply for" }

            div {
                class: "filter-buttons",
                button {
                    class: if filter().is_none() { "active" } else { "" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for kind in SchemeType::ALL {
                    button {
                        class: if filter() == Some(kind) { "active" } else { "" },
                        onclick: move |_| filter.set(Some(kind)),
                        "{kind}"
                    }
                }
            }

            match schemes() {
                None => rsx! {
                    p { class: "loading-text", "Loading schemes..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) => {
                    let visible: Vec<_> = list
                        .into_iter()
                        .filter(|s| filter().map(|f| s.scheme_type == f).unwrap_or(true))
                        .collect();
                    rsx! {
                        if visible.is_empty() {
                            div { class: "empty-state", p { "No schemes found" } }
                        }
                        div {
                            class: "card-grid",
                            for scheme in visible {
                                div {
                                    class: "scheme-card",
                                    span { class: "scheme-type", "{scheme.scheme_type}" }
                                    h4 { "{scheme.title}" }
                                    p { "{scheme.description}" }

                                    if !scheme.benefits.is_empty() {
                                        p { b { "Benefits: " } "{scheme.benefits}" }
                                    }
                                    if !scheme.eligibility.is_empty() {
                                        p { b { "Eligibility: " } "{scheme.eligibility}" }
                                    }
                                    if !scheme.apply_process.is_empty() {
                                        p { b { "How to apply: " } "{scheme.apply_process}" }
                                    }
                                    if !scheme.apply_link.is_empty() {
                                        a {
                                            class: "btn btn-primary",
                                            href: "{scheme.apply_link}",
                                            target: "_blank",
                                            "Apply Online"
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
