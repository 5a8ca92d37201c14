//! Status badge styling shared by the citizen and admin views.

use dioxus::prelude::*;
use domain::models::{ApplicationStatus, ComplaintStatus, ProjectStatus};

pub fn application_status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "status-pending",
        ApplicationStatus::Approved => "status-approved",
        ApplicationStatus::Rejected => "status-rejected",
    }
}

pub fn complaint_status_class(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Pending => "status-pending",
        ComplaintStatus::InProgress => "status-progress",
        ComplaintStatus::Resolved => "status-resolved",
    }
}

pub fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Planned => "status-planned",
        ProjectStatus::Ongoing => "status-progress",
        ProjectStatus::Completed => "status-resolved",
    }
}

#[component]
pub fn StatusBadge(label: String, tone: &'static str) -> Element {
    rsx! {
        span {
            class: "status-badge {tone}",
            "{label}"
        }
    }
}
