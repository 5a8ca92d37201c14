//! Village profile endpoints. Exactly one profile exists (row id 1); the
//! admin About manager upserts it in place and the public About page reads
//! it back.

use dioxus::prelude::*;

use domain::models::VillageProfileInfo;

/// Fetch the village profile, if one has been saved yet.
#[cfg(feature = "server")]
#[get("/api/village")]
pub async fn get_village_profile() -> Result<Option<VillageProfileInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::VillageRow;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: Option<VillageRow> = sqlx::query_as("SELECT * FROM village_profile WHERE id = 1")
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.map(|r| r.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/village")]
pub async fn get_village_profile() -> Result<Option<VillageProfileInfo>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or replace the village profile.
#[cfg(feature = "server")]
#[post("/api/village", session: tower_sessions::Session)]
pub async fn save_village_profile(
    profile: VillageProfileInfo,
) -> Result<VillageProfileInfo, ServerFnError> {
    use crate::auth;
    use crate::db::get_pool;
    use crate::models::VillageRow;

    auth::require_admin(&session).await?;

    let name = profile.name.trim().to_string();
    if name.is_empty() {
        return Err(ServerFnError::new("Village name is required"));
    }
    if profile.population_male + profile.population_female > profile.population_total {
        return Err(ServerFnError::new(
            "Male and female population cannot exceed the total",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let row: VillageRow = sqlx::query_as(
        "INSERT INTO village_profile
            (id, name, history, population_total, population_male, population_female, area, description)
         VALUES (1, $1, $2, $3, $4, $5, $6, $7)
         ON CONFLICT (id) DO UPDATE SET
            name = $1,
            history = $2,
            population_total = $3,
            population_male = $4,
            population_female = $5,
            area = $6,
            description = $7,
            updated_at = NOW()
         RETURNING *",
    )
    .bind(&name)
    .bind(profile.history.trim())
    .bind(profile.population_total as i32)
    .bind(profile.population_male as i32)
    .bind(profile.population_female as i32)
    .bind(profile.area.trim())
    .bind(profile.description.trim())
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(row.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/village")]
pub async fn save_village_profile(
    profile: VillageProfileInfo,
) -> Result<VillageProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
