//! Development project endpoints: public progress listing plus admin
//! add/edit/delete. Projects can carry multiple photos.

use dioxus::prelude::*;

use domain::models::{ProjectInfo, ProjectInput};
use domain::services::DocumentUpload;

#[cfg(feature = "server")]
fn checked(input: ProjectInput) -> Result<ProjectInput, ServerFnError> {
    let input = ProjectInput {
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        ..input
    };
    if input.name.is_empty() {
        return Err(ServerFnError::new("Project name is required"));
    }
    if input.progress > 100 {
        return Err(ServerFnError::new("Progress must be between 0 and 100"));
    }
    if input.funds_used < 0.0 {
        return Err(ServerFnError::new("Funds used cannot be negative"));
    }
    Ok(input)
}

/// List development projects, newest first.
#[cfg(feature = "server")]
#[get("/api/development")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ProjectRow> =
        sqlx::query_as("SELECT * FROM development_projects ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/development")]
pub async fn list_projects() -> Result<Vec<ProjectInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create a project with any number of photos.
#[cfg(feature = "server")]
#[post("/api/development", session: tower_sessions::Session)]
pub async fn create_project(
    input: ProjectInput,
    images: Vec<DocumentUpload>,
) -> Result<ProjectInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;
    let input = checked(input)?;

    let mut urls = Vec::with_capacity(images.len());
    for image in &images {
        let url = uploads::store_image("development", image)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        urls.push(url);
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: ProjectRow = sqlx::query_as(
        "INSERT INTO development_projects (name, description, progress, funds_used, status, images)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.progress as i32)
    .bind(input.funds_used)
    .bind(input.status.as_str())
    .bind(sqlx::types::Json(&urls))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/development")]
pub async fn create_project(
    input: ProjectInput,
    images: Vec<DocumentUpload>,
) -> Result<ProjectInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Update a project's fields; newly uploaded photos are appended to the
/// stored set.
#[cfg(feature = "server")]
#[post("/api/development/:id/update", session: tower_sessions::Session)]
pub async fn update_project(
    id: String,
    input: ProjectInput,
    images: Vec<DocumentUpload>,
) -> Result<ProjectInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProjectRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;
    let input = checked(input)?;

    let project_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<ProjectRow> =
        sqlx::query_as("SELECT * FROM development_projects WHERE id = $1")
            .bind(project_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(existing) = existing else {
        return Err(ServerFnError::new("Project not found"));
    };

    let mut urls = existing.images.0.clone();
    for image in &images {
        let url = uploads::store_image("development", image)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        urls.push(url);
    }

    let row: ProjectRow = sqlx::query_as(
        "UPDATE development_projects SET
            name = $2,
            description = $3,
            progress = $4,
            funds_used = $5,
            status = $6,
            images = $7
         WHERE id = $1 RETURNING *",
    )
    .bind(project_id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.progress as i32)
    .bind(input.funds_used)
    .bind(input.status.as_str())
    .bind(sqlx::types::Json(&urls))
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/development/:id/update")]
pub async fn update_project(
    id: String,
    input: ProjectInput,
    images: Vec<DocumentUpload>,
) -> Result<ProjectInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a project.
#[cfg(feature = "server")]
#[post("/api/development/:id/delete", session: tower_sessions::Session)]
pub async fn delete_project(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let project_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM development_projects WHERE id = $1")
        .bind(project_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/development/:id/delete")]
pub async fn delete_project(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
