//! Contact directory endpoints: the Panchayat members shown on the public
//! Contact page, managed by the admin back-office.

use dioxus::prelude::*;

use domain::models::{ContactInfo, PanchayatRole};
use domain::services::DocumentUpload;

/// List directory members. Ordered by role seniority as listed in
/// [`PanchayatRole::ALL`], then by name.
#[cfg(feature = "server")]
#[get("/api/contacts")]
pub async fn list_contacts() -> Result<Vec<ContactInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ContactRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ContactRow> =
        sqlx::query_as("SELECT * FROM contact_members ORDER BY created_at")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let mut members: Vec<ContactInfo> = rows.iter().map(|r| r.to_info()).collect();
    members.sort_by_key(|m| {
        let rank = PanchayatRole::ALL
            .iter()
            .position(|r| *r == m.role)
            .unwrap_or(PanchayatRole::ALL.len());
        (rank, m.name.clone())
    });
    Ok(members)
}

#[cfg(not(feature = "server"))]
#[get("/api/contacts")]
pub async fn list_contacts() -> Result<Vec<ContactInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Add a directory member, optionally with a photo.
#[cfg(feature = "server")]
#[post("/api/contacts", session: tower_sessions::Session)]
pub async fn create_contact(
    name: String,
    role: PanchayatRole,
    phone: String,
    email: String,
    photo: Option<DocumentUpload>,
) -> Result<ContactInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ContactRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    domain::validate::validate_mobile(phone.trim()).map_err(|e| ServerFnError::new(e))?;
    let email = email.trim().to_lowercase();
    let email = if email.is_empty() { None } else { Some(email) };

    let photo_url = match photo {
        Some(file) => Some(
            uploads::store_image("contacts", &file)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?,
        ),
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ContactRow = sqlx::query_as(
        "INSERT INTO contact_members (name, role, phone, email, photo)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&name)
    .bind(role.as_str())
    .bind(phone.trim())
    .bind(&email)
    .bind(&photo_url)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/contacts")]
pub async fn create_contact(
    name: String,
    role: PanchayatRole,
    phone: String,
    email: String,
    photo: Option<DocumentUpload>,
) -> Result<ContactInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a member; a `None` photo keeps the stored one.
#[cfg(feature = "server")]
#[post("/api/contacts/:id/update", session: tower_sessions::Session)]
pub async fn update_contact(
    id: String,
    name: String,
    role: PanchayatRole,
    phone: String,
    email: String,
    photo: Option<DocumentUpload>,
) -> Result<ContactInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ContactRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;

    let member_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Name is required"));
    }
    domain::validate::validate_mobile(phone.trim()).map_err(|e| ServerFnError::new(e))?;
    let email = email.trim().to_lowercase();
    let email = if email.is_empty() { None } else { Some(email) };

    let photo_url = match photo {
        Some(file) => Some(
            uploads::store_image("contacts", &file)
                .await
                .map_err(|e| ServerFnError::new(e.to_string()))?,
        ),
        None => None,
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<ContactRow> = sqlx::query_as(
        "UPDATE contact_members SET
            name = $2,
            role = $3,
            phone = $4,
            email = $5,
            photo = COALESCE($6, photo)
         WHERE id = $1 RETURNING *",
    )
    .bind(member_id)
    .bind(&name)
    .bind(role.as_str())
    .bind(phone.trim())
    .bind(&email)
    .bind(&photo_url)
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Member not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/contacts/:id/update")]
pub async fn update_contact(
    id: String,
    name: String,
    role: PanchayatRole,
    phone: String,
    email: String,
    photo: Option<DocumentUpload>,
) -> Result<ContactInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a member from the directory.
#[cfg(feature = "server")]
#[post("/api/contacts/:id/delete", session: tower_sessions::Session)]
pub async fn delete_contact(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let member_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM contact_members WHERE id = $1")
        .bind(member_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/contacts/:id/delete")]
pub async fn delete_contact(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
