//! Admin dashboard: entity counts fetched on mount.

use dioxus::prelude::*;

use domain::models::ApplicationStatus;

use super::AdminShell;

#[derive(Clone, PartialEq, Default)]
struct DashboardStats {
    notices: usize,
    schemes: usize,
    members: usize,
    projects: usize,
    pending_applications: usize,
    complaints: usize,
}

#[component]
pub fn AdminDashboard() -> Element {
    let stats = use_resource(move || async move {
        let mut stats = DashboardStats::default();
        if let Ok(list) = api::list_notices().await {
            stats.notices = list.len();
        }
        if let Ok(list) = api::list_schemes().await {
            stats.schemes = list.len();
        }
        if let Ok(list) = api::list_contacts().await {
            stats.members = list.len();
        }
        if let Ok(list) = api::list_projects().await {
            stats.projects = list.len();
        }
        if let Ok(list) = api::admin_list_applications().await {
            stats.pending_applications = list
                .iter()
                .filter(|a| a.status == ApplicationStatus::Pending)
                .count();
        }
        if let Ok(list) = api::list_complaints().await {
            stats.complaints = list.len();
        }
        stats
    });

    rsx! {
        AdminShell {
            title: "Dashboard",

            match stats() {
                None => rsx! {
                    p { class: "loading-text", "Loading statistics..." }
                },
                Some(stats) => rsx! {
                    div {
                        class: "stats-grid",
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.pending_applications}" }
                            span { class: "stat-label", "Pending Applications" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.complaints}" }
                            span { class: "stat-label", "Complaints" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.notices}" }
                            span { class: "stat-label", "Notices" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.schemes}" }
                            span { class: "stat-label", "Schemes" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.projects}" }
                            span { class: "stat-label", "Development Works" }
                        }
                        div {
                            class: "stat-card",
                            span { class: "stat-value", "{stats.members}" }
                            span { class: "stat-label", "Members" }
                        }
                    }
                }
            }
        }
    }
}
