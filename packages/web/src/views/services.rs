use dioxus::prelude::*;

use domain::{required_documents, ServiceType};

use crate::Route;

/// Services catalogue: every certificate service, its document checklist,
/// and an Apply button that opens the form with the service locked in.
#[component]
pub fn Services() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "🏛️ Gram Panchayat Services" }
            p { class: "page-subtitle", "Apply for certificates and services online" }

            div {
                class: "card-grid",
                for service in ServiceType::ALL {
                    div {
                        class: "service-card",
                        h3 { "{service}" }
                        p { class: "desc", "{service.description()}" }

                        div {
                            class: "documents-list",
                            b { "Required documents" }
                            ul {
                                for spec in required_documents(service) {
                                    li { "{spec.label}" }
                                }
                            }
                        }

                        button {
                            class: "btn btn-primary apply-btn",
                            onclick: move |_| {
                                nav.push(Route::ApplyServicePage {
                                    service: service.as_str().to_string(),
                                });
                            },
                            "Apply Now"
                        }
                    }
                }
            }
        }
    }
}
