//! Complaint endpoints: citizens file complaints; admins list, restatus,
//! respond, and delete them.

use dioxus::prelude::*;

use domain::models::{ComplaintInfo, ComplaintStatus};
use domain::services::DocumentUpload;

/// File a complaint under the current citizen's session. The submitter's
/// name and email come from the account, not the form.
#[cfg(feature = "server")]
#[post("/api/complaints", session: tower_sessions::Session)]
pub async fn submit_complaint(
    title: String,
    category: String,
    description: String,
    attachment: Option<DocumentUpload>,
) -> Result<ComplaintInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ComplaintRow;
    use crate::{auth, uploads};

    let user = auth::require_user(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    let category = category.trim().to_string();
    if category.is_empty() {
        return Err(ServerFnError::new("Category is required"));
    }
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(ServerFnError::new("Description is required"));
    }

    let attachment_url = match attachment {
        Some(file) => Some(
            uploads::store_document("complaints", &file)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?,
        ),
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ComplaintRow = sqlx::query_as(
        "INSERT INTO complaints (title, category, description, user_name, user_email, attachment)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(&title)
    .bind(&category)
    .bind(&description)
    .bind(&user.full_name)
    .bind(&user.email)
    .bind(&attachment_url)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints")]
pub async fn submit_complaint(
    title: String,
    category: String,
    description: String,
    attachment: Option<DocumentUpload>,
) -> Result<ComplaintInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// List every complaint, newest first. Admin only.
#[cfg(feature = "server")]
#[get("/api/complaints", session: tower_sessions::Session)]
pub async fn list_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ComplaintRow;

    auth::require_admin(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ComplaintRow> =
        sqlx::query_as("SELECT * FROM complaints ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/complaints")]
pub async fn list_complaints() -> Result<Vec<ComplaintInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Set a complaint's handling state. Any of the three states may be chosen
/// directly.
#[cfg(feature = "server")]
#[post("/api/complaints/:id/status", session: tower_sessions::Session)]
pub async fn set_complaint_status(
    id: String,
    status: ComplaintStatus,
) -> Result<ComplaintInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ComplaintRow;

    auth::require_admin(&session).await?;

    let complaint_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ComplaintRow> = sqlx::query_as(
        "UPDATE complaints SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(complaint_id)
    .bind(status.as_str())
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Complaint not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints/:id/status")]
pub async fn set_complaint_status(
    id: String,
    status: ComplaintStatus,
) -> Result<ComplaintInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Record the office's response text on a complaint.
#[cfg(feature = "server")]
#[post("/api/complaints/:id/response", session: tower_sessions::Session)]
pub async fn respond_complaint(id: String, response: String) -> Result<ComplaintInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::ComplaintRow;

    auth::require_admin(&session).await?;

    let response = response.trim().to_string();
    if response.is_empty() {
        return Err(ServerFnError::new("Response text is required"));
    }

    let complaint_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ComplaintRow> = sqlx::query_as(
        "UPDATE complaints SET admin_response = $2 WHERE id = $1 RETURNING *",
    )
    .bind(complaint_id)
    .bind(&response)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Complaint not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints/:id/response")]
pub async fn respond_complaint(id: String, response: String) -> Result<ComplaintInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a complaint.
#[cfg(feature = "server")]
#[post("/api/complaints/:id/delete", session: tower_sessions::Session)]
pub async fn delete_complaint(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let complaint_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM complaints WHERE id = $1")
        .bind(complaint_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/complaints/:id/delete")]
pub async fn delete_complaint(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
