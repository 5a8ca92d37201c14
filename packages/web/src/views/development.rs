use dioxus::prelude::*;

use domain::models::ProjectStatus;
use ui::{friendly_error, project_status_class, StatusBadge};

/// Public development-works page: project cards with progress bars and an
/// in-memory status filter.
#[component]
pub fn Development() -> Element {
    let projects = use_resource(move || async move { api::list_projects().await });
    let mut filter = use_signal(|| Option::<ProjectStatus>::None);

    rsx! {
        div {
            class: "page-section",
            h2 { class: "page-title", "🚧 Development Works" }
            p { class: "page-subtitle", "Track the progress of village development projects" }

            div {
                class: "filter-buttons",
                button {
                    class: if filter().is_none() { "active" } else { "" },
                    onclick: move |_| filter.set(None),
                    "All"
                }
                for status in ProjectStatus::ALL {
                    button {
                        class: if filter() == Some(status) { "active" } else { "" },
                        onclick: move |_| filter.set(Some(status)),
                        "{status}"
                    }
                }
            }

            match projects() {
                None => rsx! {
                    p { class: "loading-text", "Loading projects..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error-text", "{friendly_error(&e)}" }
                },
                Some(Ok(list)) => {
                    let visible: Vec<_> = list
                        .into_iter()
                        .filter(|p| filter().map(|f| p.status == f).unwrap_or(true))
                        .collect();
                    rsx! {
                        if visible.is_empty() {
                            div { class: "empty-state", p { "No projects found" } }
                        }
                        div {
                            class: "card-grid",
                            for project in visible {
                                div {
                                    class: "project-card",
                                    div {
                                        class: "card-header",
                                        h4 { "{project.name}" }
                                        StatusBadge {
                                            label: project.status.to_string(),
                                            tone: project_status_class(project.status),
                                        }
                                    }
                                    p { "{project.description}" }

                                    div {
                                        class: "progress-track",
                                        div {
                                            class: "progress-fill",
                                            style: "width: {project.progress}%",
                                        }
                                    }
                                    div {
                                        class: "project-meta",
                                        span { "{project.progress}% complete" }
                                        span { "Funds used: ₹{project.funds_used}" }
                                    }

                                    if !project.images.is_empty() {
                                        div {
                                            class: "project-images",
                                            for url in project.images {
                                                img { src: "{url}", loading: "lazy" }
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
