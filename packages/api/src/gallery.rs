//! Gallery endpoints: public listing, admin upload and delete.

use dioxus::prelude::*;

use domain::models::GalleryImageInfo;
use domain::services::DocumentUpload;

/// List gallery images, newest first.
#[cfg(feature = "server")]
#[get("/api/gallery")]
pub async fn list_gallery() -> Result<Vec<GalleryImageInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::GalleryRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<GalleryRow> =
        sqlx::query_as("SELECT * FROM gallery_images ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(|r| r.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/gallery")]
pub async fn list_gallery() -> Result<Vec<GalleryImageInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Upload a photo into the gallery.
#[cfg(feature = "server")]
#[post("/api/gallery", session: tower_sessions::Session)]
pub async fn add_gallery_image(
    image: DocumentUpload,
    caption: String,
    category: String,
) -> Result<GalleryImageInfo, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::GalleryRow;
    use crate::{auth, uploads};

    auth::require_admin(&session).await?;

    let url = uploads::store_image("gallery", &image)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let caption = caption.trim().to_string();
    let caption = if caption.is_empty() { None } else { Some(caption) };
    let category = category.trim().to_string();
    let category = if category.is_empty() { None } else { Some(category) };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: GalleryRow = sqlx::query_as(
        "INSERT INTO gallery_images (url, caption, category) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&url)
    .bind(&caption)
    .bind(&category)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/gallery")]
pub async fn add_gallery_image(
    image: DocumentUpload,
    caption: String,
    category: String,
) -> Result<GalleryImageInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Remove a photo from the gallery.
#[cfg(feature = "server")]
#[post("/api/gallery/:id/delete", session: tower_sessions::Session)]
pub async fn delete_gallery_image(id: String) -> Result<(), ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;

    auth::require_admin(&session).await?;

    let image_id =
        uuid::Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    sqlx::query("DELETE FROM gallery_images WHERE id = $1")
        .bind(image_id)
        .execute(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/gallery/:id/delete")]
pub async fn delete_gallery_image(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
