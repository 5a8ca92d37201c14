//! Welfare scheme endpoints: public listing plus admin add/edit/delete.

use dioxus::prelude::*;

use domain::models::{SchemeInfo, SchemeInput};

#[cfg(feature = "server")]
fn checked(input: SchemeInput) -> Result<SchemeInput, ServerFnError> {
    let input = SchemeInput {
        title: input.title.trim().to_string(),
        description: input.description.trim().to_string(),
        benefits: input.benefits.trim().to_string(),
        eligibility: input.eligibility.trim().to_string(),
        apply_process: input.apply_process.trim().to_string(),
        apply_link: input.apply_link.trim().to_string(),
        scheme_type: input.scheme_type,
    };
    if input.title.is_empty() {
        return Err(ServerFnError::new("Title is required"));
    }
    if input.description.is_empty() {
        return Err(ServerFnError::new("Description is required"));
    }
    Ok(input)
}

/// List all schemes, newest first.
#[cfg(feature = "server")]
#[get("/api/schemes")]
pub async fn list_schemes() -> Result<Vec<SchemeInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::SchemeRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<SchemeRow> = sqlx::query_as("SELECT * FROM schemes ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/schemes")]
pub async fn list_schemes() -> Result<Vec<SchemeInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a scheme.
#[cfg(feature = "server")]
#[post("/api/schemes", session: tower_sessions::Session)]
pub async fn create_scheme(input: SchemeInput) -> Result<SchemeInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::SchemeRow;

    auth::require_admin(&session).await?;
    let input = checked(input)?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: SchemeRow = sqlx::query_as(
        "INSERT INTO schemes (title, description, benefits, eligibility, apply_process, apply_link, scheme_type)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.benefits)
    .bind(&input.eligibility)
    .bind(&input.apply_process)
    .bind(&input.apply_link)
    .bind(input.scheme_type.as_str())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/schemes")]
pub async fn create_scheme(input: SchemeInput) -> Result<SchemeInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a scheme in place.
#[cfg(feature = "server")]
#[post("/api/schemes/:id/update", session: tower_sessions::Session)]
pub async fn update_scheme(id: String, input: SchemeInput) -> Result<SchemeInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::SchemeRow;

    auth::require_admin(&session).await?;
    let input = checked(input)?;

    let scheme_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<SchemeRow> = sqlx::query_as(
        "UPDATE schemes SET
            title = $2,
            description = $3,
            benefits = $4,
            eligibility = $5,
            apply_process = $6,
            apply_link = $7,
            scheme_type = $8
         WHERE id = $1 RETURNING *",
    )
    .bind(scheme_id)
    .bind(&input.title)
    .bind(&input.description)
    .bind(&input.benefits)
    .bind(&input.eligibility)
    .bind(&input.apply_process)
    .bind(&input.apply_link)
    .bind(input.scheme_type.as_str())
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    row.map(|r| r.to_info())
        .ok_or_else(|| ServerFnError::new("Scheme not found"))
}

#[cfg(not(feature = "server"))]
#[post("/api/schemes/:id/update")]
pub async fn update_scheme(id: String, input: SchemeInput) -> Result<SchemeInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a scheme.
#[cfg(feature = "server")]
#[post("/api/schemes/:id/delete", session: tower_sessions::Session)]
pub async fn delete_scheme(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let scheme_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM schemes WHERE id = $1")
        .bind(scheme_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/schemes/:id/delete")]
pub async fn delete_scheme(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
