//! Service application endpoints: the citizen submission workflow, the
//! citizen's own application views, and the admin approve/reject flow.
//!
//! The server re-runs the full `domain::validate` pass on every submission;
//! the client-side validation only exists so citizens get immediate
//! feedback.

use dioxus::prelude::*;

use domain::models::{ApplicationInfo, ApplicationStatus};
use domain::services::{ApplicationDraft, DocumentUpload};

/// Submit an application with its documents. Every required document for
/// the draft's service type must be present, allow-listed, and within the
/// size ceiling.
#[cfg(feature = "server")]
#[post("/api/services/apply", session: tower_sessions::Session)]
pub async fn apply_service(
    draft: ApplicationDraft,
    documents: Vec<DocumentUpload>,
) -> Result<ApplicationInfo, ServerFnError> {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, Utc};
    use domain::services::required_documents;
    use domain::validate::{validate_draft, FileMeta};

    use crate::db::get_pool;
    use crate::models::ApplicationRow;
    use crate::{auth, uploads};

    let user = auth::require_user(&session).await?;

    let by_key: BTreeMap<&str, &DocumentUpload> =
        documents.iter().map(|d| (d.key.as_str(), d)).collect();

    let metas: BTreeMap<String, FileMeta> = by_key
        .iter()
        .map(|(key, doc)| {
            (
                key.to_string(),
                FileMeta {
                    content_type: doc.content_type.clone(),
                    len: doc.len(),
                },
            )
        })
        .collect();

    let errors = validate_draft(&draft, &metas, Utc::now().date_naive());
    if !errors.is_empty() {
        let joined = errors.values().cloned().collect::<Vec<_>>().join("; ");
        return Err(ServerFnError::new(joined));
    }

    // Store only the documents the service actually requires; stray keys
    // in the payload are dropped.
    let mut stored = BTreeMap::new();
    for spec in required_documents(draft.service_type) {
        let doc = by_key
            .get(spec.key)
            .ok_or_else(|| ServerFnError::new(format!("{} is required", spec.label)))?;
        let url = uploads::store_document("applications", doc)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        stored.insert(spec.key.to_string(), url);
    }

    let (deceased_name, date_of_death) = if draft.service_type.needs_deceased_details() {
        let date = NaiveDate::parse_from_str(draft.date_of_death.trim(), "%Y-%m-%d")
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        (Some(draft.deceased_name.trim().to_string()), Some(date))
    } else {
        (None, None)
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ApplicationRow = sqlx::query_as(
        "INSERT INTO service_applications
            (user_id, service_type, full_name, address, mobile, deceased_name, date_of_death, documents)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(user.id)
    .bind(draft.service_type.as_str())
    .bind(draft.full_name.trim())
    .bind(draft.address.trim())
    .bind(draft.mobile.trim())
    .bind(&deceased_name)
    .bind(date_of_death)
    .bind(sqlx::types::Json(&stored))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        user = %user.email,
        service = draft.service_type.as_str(),
        "application submitted"
    );

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/services/apply")]
pub async fn apply_service(
    draft: ApplicationDraft,
    documents: Vec<DocumentUpload>,
) -> Result<ApplicationInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The current citizen's applications, newest first.
#[cfg(feature = "server")]
#[get("/api/services/user/applications", session: tower_sessions::Session)]
pub async fn my_applications() -> Result<Vec<ApplicationInfo>, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ApplicationRow;

    let user = auth::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ApplicationRow> = sqlx::query_as(
        "SELECT * FROM service_applications WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/services/user/applications")]
pub async fn my_applications() -> Result<Vec<ApplicationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Withdraw one of the citizen's own applications. Only still-Pending
/// applications can be withdrawn.
#[cfg(feature = "server")]
#[post("/api/services/application/:id/delete", session: tower_sessions::Session)]
pub async fn delete_application(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;

    let application_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let result = sqlx::query(
        "DELETE FROM service_applications
         WHERE id = $1 AND user_id = $2 AND LOWER(status) = 'pending'",
    )
    .bind(application_id)
    .bind(user.id)
    .execute(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(ServerFnError::new(
            "Only your own pending applications can be withdrawn",
        ));
    }

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/services/application/:id/delete")]
pub async fn delete_application(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Every application in the system, newest first. Admin only.
#[cfg(feature = "server")]
#[get("/api/admin/services", session: tower_sessions::Session)]
pub async fn admin_list_applications() -> Result<Vec<ApplicationInfo>, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ApplicationRow;

    auth::require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ApplicationRow> =
        sqlx::query_as("SELECT * FROM service_applications ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/services")]
pub async fn admin_list_applications() -> Result<Vec<ApplicationInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Decide a pending application. The decision is terminal and the remark is
/// mandatory — it is what the citizen sees on their status view.
#[cfg(feature = "server")]
#[post("/api/admin/services/:id/status", session: tower_sessions::Session)]
pub async fn set_application_status(
    id: String,
    status: ApplicationStatus,
    remark: String,
) -> Result<ApplicationInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ApplicationRow;

    auth::require_admin(&session).await?;

    if status == ApplicationStatus::Pending {
        return Err(ServerFnError::new(
            "An application can only be approved or rejected",
        ));
    }
    let remark = remark.trim().to_string();
    if remark.is_empty() {
        return Err(ServerFnError::new("A remark for the applicant is required"));
    }

    let application_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ApplicationRow> = sqlx::query_as(
        "UPDATE service_applications SET status = $2, admin_remark = $3
         WHERE id = $1 AND LOWER(status) = 'pending' RETURNING *",
    )
    .bind(application_id)
    .bind(status.as_str())
    .bind(&remark)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Application not found or already decided"))
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/services/:id/status")]
pub async fn set_application_status(
    id: String,
    status: ApplicationStatus,
    remark: String,
) -> Result<ApplicationInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
