//! # Entity DTOs and status enums
//!
//! Client-safe projections of every backend-owned record. These types cross
//! the server/client boundary through Dioxus server functions, so they are
//! `Serialize + Deserialize + PartialEq` and avoid server-only types
//! (database ids travel as `String`).
//!
//! The closed enums ([`ApplicationStatus`], [`ComplaintStatus`],
//! [`ProjectStatus`], [`SchemeType`], [`Role`], [`PanchayatRole`]) render
//! with one canonical spelling and parse case-insensitively, because stored
//! data from older portal generations mixes casings (`"pending"` vs
//! `"Pending"`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::services::ServiceType;

/// Account role. Stored lowercase, matching the auth rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Citizen,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "citizen" | "user" => Ok(Role::Citizen),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub village: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A public notice published by the Panchayat office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoticeInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_important: bool,
    /// Server-relative attachment URL (`/uploads/...`), if any.
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Order notices for display: important ones first, newest first within
/// each group.
pub fn sort_notices(notices: &mut [NoticeInfo]) {
    notices.sort_by(|a, b| {
        b.is_important
            .cmp(&a.is_important)
            .then(b.created_at.cmp(&a.created_at))
    });
}

/// Sponsoring level of a welfare scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SchemeType {
    #[default]
    Central,
    State,
}

impl SchemeType {
    pub const ALL: [SchemeType; 2] = [SchemeType::Central, SchemeType::State];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeType::Central => "Central",
            SchemeType::State => "State",
        }
    }
}

impl fmt::Display for SchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "central" => Ok(SchemeType::Central),
            "state" => Ok(SchemeType::State),
            other => Err(format!("unknown scheme type: {other}")),
        }
    }
}

/// A government welfare scheme listed on the portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemeInfo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub eligibility: String,
    pub apply_process: String,
    pub apply_link: String,
    pub scheme_type: SchemeType,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of a development project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Planned,
        ProjectStatus::Ongoing,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::Ongoing => "Ongoing",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Older records spell the middle state "in-progress" or "In Progress".
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(ProjectStatus::Planned),
            "ongoing" | "in-progress" | "in progress" => Ok(ProjectStatus::Ongoing),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(format!("unknown project status: {other}")),
        }
    }
}

/// A village development project with its funding and progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Completion percentage, 0–100.
    pub progress: u8,
    /// Funds spent so far, in rupees.
    pub funds_used: f64,
    pub status: ProjectStatus,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A photo in the village gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImageInfo {
    pub id: String,
    pub url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Panchayat positions listed in the contact directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanchayatRole {
    Sarpanch,
    UpaSarpanch,
    WardMember,
    GramSevak,
    Vdo,
    RozgarSevak,
    AnganwadiWorker,
    AshaWorker,
    PolicePatil,
    Clerk,
}

impl PanchayatRole {
    pub const ALL: [PanchayatRole; 10] = [
        PanchayatRole::Sarpanch,
        PanchayatRole::UpaSarpanch,
        PanchayatRole::WardMember,
        PanchayatRole::GramSevak,
        PanchayatRole::Vdo,
        PanchayatRole::RozgarSevak,
        PanchayatRole::AnganwadiWorker,
        PanchayatRole::AshaWorker,
        PanchayatRole::PolicePatil,
        PanchayatRole::Clerk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanchayatRole::Sarpanch => "Sarpanch",
            PanchayatRole::UpaSarpanch => "Upa-Sarpanch",
            PanchayatRole::WardMember => "Ward Member",
            PanchayatRole::GramSevak => "Gram Sevak",
            PanchayatRole::Vdo => "VDO",
            PanchayatRole::RozgarSevak => "Rozgar Sevak",
            PanchayatRole::AnganwadiWorker => "Anganwadi Worker",
            PanchayatRole::AshaWorker => "ASHA Worker",
            PanchayatRole::PolicePatil => "Police Patil",
            PanchayatRole::Clerk => "Clerk",
        }
    }
}

impl fmt::Display for PanchayatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanchayatRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        PanchayatRole::ALL
            .iter()
            .find(|r| r.as_str().to_lowercase() == needle)
            .copied()
            .ok_or_else(|| format!("unknown panchayat role: {s}"))
    }
}

/// A member of the Panchayat contact directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub id: String,
    pub name: String,
    pub role: PanchayatRole,
    pub phone: String,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Handling state of a citizen complaint. Any state may be set directly;
/// the three values are a closed choice, not a strict chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ComplaintStatus::Pending),
            "in progress" | "in-progress" | "inprogress" => Ok(ComplaintStatus::InProgress),
            "resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("unknown complaint status: {other}")),
        }
    }
}

/// Suggested complaint categories offered by the submission form. The field
/// itself is free text, so older records with other labels still render.
pub const COMPLAINT_CATEGORIES: [&str; 6] = [
    "Water Supply",
    "Electricity",
    "Road & Infrastructure",
    "Sanitation",
    "Street Lights",
    "Other",
];

/// A citizen complaint with the office's handling state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplaintInfo {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub status: ComplaintStatus,
    pub admin_response: Option<String>,
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Decision state of a service application. `Approved` and `Rejected` are
/// terminal: the portal offers no transition out of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

/// A citizen's certificate application as shown to both the applicant and
/// the admin back-office.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationInfo {
    pub id: String,
    pub service_type: ServiceType,
    pub full_name: String,
    pub address: String,
    pub mobile: String,
    pub deceased_name: Option<String>,
    pub date_of_death: Option<NaiveDate>,
    /// Document key → stored attachment URL.
    pub documents: BTreeMap<String, String>,
    pub status: ApplicationStatus,
    pub admin_remark: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The village profile singleton edited by the admin About manager and
/// rendered by the public About page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VillageProfileInfo {
    pub name: String,
    pub history: String,
    pub population_total: u32,
    pub population_male: u32,
    pub population_female: u32,
    pub area: String,
    pub description: String,
}

/// The citizen profile payload: the account plus its applications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileInfo {
    pub user: UserInfo,
    pub applications: Vec<ApplicationInfo>,
}

/// Fields of the scheme create/edit form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SchemeInput {
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub eligibility: String,
    pub apply_process: String,
    pub apply_link: String,
    pub scheme_type: SchemeType,
}

/// Fields of the development-project create/edit form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub funds_used: f64,
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn notice(id: &str, important: bool, day: u32) -> NoticeInfo {
        NoticeInfo {
            id: id.to_string(),
            title: format!("Notice {id}"),
            description: String::new(),
            is_important: important,
            attachment: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn important_notices_come_first_newest_within_group() {
        let mut notices = vec![
            notice("plain-old", false, 1),
            notice("imp-old", true, 2),
            notice("plain-new", false, 20),
            notice("imp-new", true, 10),
        ];
        sort_notices(&mut notices);

        let order: Vec<&str> = notices.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(order, ["imp-new", "imp-old", "plain-new", "plain-old"]);
    }

    #[test]
    fn application_status_parses_any_casing() {
        assert_eq!("pending".parse(), Ok(ApplicationStatus::Pending));
        assert_eq!("Pending".parse(), Ok(ApplicationStatus::Pending));
        assert_eq!("APPROVED".parse(), Ok(ApplicationStatus::Approved));
        assert_eq!("rejected".parse(), Ok(ApplicationStatus::Rejected));
        assert!("cancelled".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn application_status_renders_canonical_casing() {
        assert_eq!(ApplicationStatus::Pending.to_string(), "Pending");
        assert_eq!(ApplicationStatus::Approved.to_string(), "Approved");
        assert_eq!(ApplicationStatus::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn complaint_status_accepts_spaced_and_hyphenated_middle_state() {
        assert_eq!("In Progress".parse(), Ok(ComplaintStatus::InProgress));
        assert_eq!("in-progress".parse(), Ok(ComplaintStatus::InProgress));
        assert_eq!(ComplaintStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn project_status_accepts_legacy_in_progress_spelling() {
        assert_eq!("in-progress".parse(), Ok(ProjectStatus::Ongoing));
        assert_eq!("Ongoing".parse(), Ok(ProjectStatus::Ongoing));
        assert_eq!("completed".parse(), Ok(ProjectStatus::Completed));
    }

    #[test]
    fn panchayat_roles_round_trip_through_display() {
        for role in PanchayatRole::ALL {
            assert_eq!(role.as_str().parse(), Ok(role));
        }
    }

    #[test]
    fn role_defaults_to_citizen_and_parses_admin() {
        assert_eq!(Role::default(), Role::Citizen);
        assert_eq!("admin".parse(), Ok(Role::Admin));
        assert_eq!("Citizen".parse(), Ok(Role::Citizen));
    }
}
