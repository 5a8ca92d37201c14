//! Notice board endpoints: public listing plus the admin add/edit/delete
//! flow. Notices may carry one attachment (JPEG, PNG or PDF).

use dioxus::prelude::*;

use domain::models::NoticeInfo;
use domain::services::DocumentUpload;

/// List all notices, newest first. Display ordering (important before the
/// rest) is applied client-side by `domain::sort_notices`.
#[cfg(feature = "server")]
#[get("/api/notices")]
pub async fn list_notices() -> Result<Vec<NoticeInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::NoticeRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<NoticeRow> = sqlx::query_as("SELECT * FROM notices ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/notices")]
pub async fn list_notices() -> Result<Vec<NoticeInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a notice.
#[cfg(feature = "server")]
#[post("/api/notices", session: tower_sessions::Session)]
pub async fn create_notice(
    title: String,
    description: String,
    is_important: bool,
    attachment: Option<DocumentUpload>,
) -> Result<NoticeInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::NoticeRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(ServerFnError::new("Description is required"));
    }

    let attachment_url = match attachment {
        Some(file) => Some(
            uploads::store_document("notices", &file)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?,
        ),
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: NoticeRow = sqlx::query_as(
        "INSERT INTO notices (title, description, is_important, attachment)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&title)
    .bind(&description)
    .bind(is_important)
    .bind(&attachment_url)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/notices")]
pub async fn create_notice(
    title: String,
    description: String,
    is_important: bool,
    attachment: Option<DocumentUpload>,
) -> Result<NoticeInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a notice's text, importance flag, and optionally replace the
/// attachment (a `None` attachment keeps the stored one).
#[cfg(feature = "server")]
#[post("/api/notices/:id/update", session: tower_sessions::Session)]
pub async fn update_notice(
    id: String,
    title: String,
    description: String,
    is_important: bool,
    attachment: Option<DocumentUpload>,
) -> Result<NoticeInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::NoticeRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;

    let notice_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    let description = description.trim().to_string();
    if description.is_empty() {
        return Err(ServerFnError::new("Description is required"));
    }

    let attachment_url = match attachment {
        Some(file) => Some(
            uploads::store_document("notices", &file)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?,
        ),
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<NoticeRow> = sqlx::query_as(
        "UPDATE notices SET
            title = $2,
            description = $3,
            is_important = $4,
            attachment = COALESCE($5, attachment)
         WHERE id = $1 RETURNING *",
    )
    .bind(notice_id)
    .bind(&title)
    .bind(&description)
    .bind(is_important)
    .bind(&attachment_url)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Notice not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/notices/:id/update")]
pub async fn update_notice(
    id: String,
    title: String,
    description: String,
    is_important: bool,
    attachment: Option<DocumentUpload>,
) -> Result<NoticeInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a notice.
#[cfg(feature = "server")]
#[post("/api/notices/:id/delete", session: tower_sessions::Session)]
pub async fn delete_notice(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let notice_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM notices WHERE id = $1")
        .bind(notice_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/notices/:id/delete")]
pub async fn delete_notice(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
