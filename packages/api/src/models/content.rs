//! Rows for the content tables: notices, schemes, gallery, contacts,
//! development projects, complaints, service applications, and the village
//! profile singleton.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{
    ComplaintInfo, ContactInfo, GalleryImageInfo, NoticeInfo, ProjectInfo, SchemeInfo,
    VillageProfileInfo,
};
use domain::services::ServiceType;
use domain::ApplicationInfo;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct NoticeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_important: bool,
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NoticeRow {
    pub fn to_info(&self) -> NoticeInfo {
        NoticeInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            is_important: self.is_important,
            attachment: self.attachment.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SchemeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub eligibility: String,
    pub apply_process: String,
    pub apply_link: String,
    pub scheme_type: String,
    pub created_at: DateTime<Utc>,
}

impl SchemeRow {
    pub fn to_info(&self) -> SchemeInfo {
        SchemeInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            benefits: self.benefits.clone(),
            eligibility: self.eligibility.clone(),
            apply_process: self.apply_process.clone(),
            apply_link: self.apply_link.clone(),
            scheme_type: self.scheme_type.parse().unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct GalleryRow {
    pub id: Uuid,
    pub url: String,
    pub caption: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GalleryRow {
    pub fn to_info(&self) -> GalleryImageInfo {
        GalleryImageInfo {
            id: self.id.to_string(),
            url: self.url.clone(),
            caption: self.caption.clone(),
            category: self.category.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactRow {
    pub fn to_info(&self) -> ContactInfo {
        ContactInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            role: self
                .role
                .parse()
                .unwrap_or(domain::models::PanchayatRole::WardMember),
            phone: self.phone.clone(),
            email: self.email.clone(),
            photo: self.photo.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub progress: i32,
    pub funds_used: f64,
    pub status: String,
    pub images: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl ProjectRow {
    pub fn to_info(&self) -> ProjectInfo {
        ProjectInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            progress: self.progress.clamp(0, 100) as u8,
            funds_used: self.funds_used,
            status: self.status.parse().unwrap_or_default(),
            images: self.images.0.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ComplaintRow {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub description: String,
    pub user_name: String,
    pub user_email: Option<String>,
    pub status: String,
    pub admin_response: Option<String>,
    pub attachment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ComplaintRow {
    pub fn to_info(&self) -> ComplaintInfo {
        ComplaintInfo {
            id: self.id.to_string(),
            title: self.title.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            user_name: self.user_name.clone(),
            user_email: self.user_email.clone(),
            status: self.status.parse().unwrap_or_default(),
            admin_response: self.admin_response.clone(),
            attachment: self.attachment.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub service_type: String,
    pub full_name: String,
    pub address: String,
    pub mobile: String,
    pub deceased_name: Option<String>,
    pub date_of_death: Option<NaiveDate>,
    pub documents: Json<BTreeMap<String, String>>,
    pub status: String,
    pub admin_remark: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ApplicationRow {
    pub fn to_info(&self) -> ApplicationInfo {
        ApplicationInfo {
            id: self.id.to_string(),
            service_type: self
                .service_type
                .parse()
                .unwrap_or(ServiceType::BirthCertificate),
            full_name: self.full_name.clone(),
            address: self.address.clone(),
            mobile: self.mobile.clone(),
            deceased_name: self.deceased_name.clone(),
            date_of_death: self.date_of_death,
            documents: self.documents.0.clone(),
            status: self.status.parse().unwrap_or_default(),
            admin_remark: self.admin_remark.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct VillageRow {
    pub id: i32,
    pub name: String,
    pub history: String,
    pub population_total: i32,
    pub population_male: i32,
    pub population_female: i32,
    pub area: String,
    pub description: String,
}

impl VillageRow {
    pub fn to_info(&self) -> VillageProfileInfo {
        VillageProfileInfo {
            name: self.name.clone(),
            history: self.history.clone(),
            population_total: self.population_total.max(0) as u32,
            population_male: self.population_male.max(0) as u32,
            population_female: self.population_female.max(0) as u32,
            area: self.area.clone(),
            description: self.description.clone(),
        }
    }
}
