use dioxus::prelude::*;

use ui::friendly_error;

/// Public About page rendering the village profile singleton.
#[component]
pub fn About() -> Element {
    let profile = use_resource(move || async move { api::get_village_profile().await });

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "🏘️ About the Village" }

            match profile() {
                None => rsx! {
                    p { class: "loading-text", "Loading..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(None)) => rsx! {
                    div { class: "empty-state", p { "The village profile has not been published yet" } }
                },
                Some(Ok(Some(village))) => rsx! {
                    div {
                        class: "village-profile",
                        h3 { "{village.name}" }
                        p { class: "village-description", "{village.description}" }

                        div {
                            class: "stats-grid",
                            div {
                                class: "stat-card",
                                span { class: "stat-value", "{village.population_total}" }
                                span { class: "stat-label", "Total Population" }
                            }
                            div {
                                class: "stat-card",
                                span { class: "stat-value", "{village.population_male}" }
                                span { class: "stat-label", "Male" }
                            }
                            div {
                                class: "stat-card",
                                span { class: "stat-value", "{village.population_female}" }
                                span { class: "stat-label", "Female" }
                            }
                            div {
                                class: "stat-card",
                                span { class: "stat-value", "{village.area}" }
                                span { class: "stat-label", "Area" }
                            }
                        }

                        if !village.history.is_empty() {
                            h4 { "History" }
                            p { "{village.history}" }
                        }
                    }
                }
            }
        }
    }
}
