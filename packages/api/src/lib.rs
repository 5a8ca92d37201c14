//! # API crate — shared fullstack server functions for the Gram Panchayat portal
//!
//! Every endpoint the web client calls is defined in this crate as a Dioxus
//! server function, compiled twice: once with the full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards
//! the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | Session key, Argon2 password hashing, `require_user` / `require_admin` gates |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | `server` | Database rows and their client-safe projections |
//! | [`uploads`] | `server` | Persists document/photo bytes and hands back `/uploads/...` URLs |
//! | [`notices`], [`schemes`], [`gallery`], [`contacts`], [`development`], [`village`], [`complaints`], [`applications`] | — | One module of server functions per content type |
//!
//! ## Server functions defined here
//!
//! The account endpoints live in this file: `get_current_user`, `login`,
//! `register`, `logout`, and `get_profile` (the citizen's account plus all
//! of their service applications).

use dioxus::prelude::*;

pub use domain::models::{ProfileInfo, UserInfo};

pub mod auth;
#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod uploads;

pub mod applications;
pub mod complaints;
pub mod contacts;
pub mod development;
pub mod gallery;
pub mod notices;
pub mod schemes;
pub mod village;

pub use applications::{
    admin_list_applications, apply_service, delete_application, my_applications,
    set_application_status,
};
pub use complaints::{
    delete_complaint, list_complaints, respond_complaint, set_complaint_status, submit_complaint,
};
pub use contacts::{create_contact, delete_contact, list_contacts, update_contact};
pub use development::{create_project, delete_project, list_projects, update_project};
pub use gallery::{add_gallery_image, delete_gallery_image, list_gallery};
pub use notices::{create_notice, delete_notice, list_notices, update_notice};
pub use schemes::{create_scheme, delete_scheme, list_schemes, update_scheme};
pub use village::{get_village_profile, save_village_profile};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user = auth::session_user(&session).await?;
    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Register a new citizen account and open a session for it.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    full_name: String,
    email: String,
    mobile: String,
    village: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let full_name = full_name.trim().to_string();
    let email = email.trim().to_lowercase();
    let village = village.trim().to_string();
    let mobile = mobile.trim().to_string();

    domain::validate::validate_full_name(&full_name).map_err(|e| ServerFnError::new(e))?;
    if email.is_empty() || !email.contains('@') {
        return Err(ServerFnError::new("Invalid email address"));
    }
    domain::validate::validate_mobile(&mobile).map_err(|e| ServerFnError::new(e))?;
    if password.len() < 8 {
        return Err(ServerFnError::new(
            "Password must be at least 8 characters",
        ));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new(
            "An account with this email already exists",
        ));
    }

    let password_hash = auth::hash_password(&password).map_err(|e| ServerFnError::new(e))?;

    let village = if village.is_empty() { None } else { Some(village) };

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (full_name, email, mobile, village, role, password_hash)
         VALUES ($1, $2, $3, $4, 'citizen', $5) RETURNING *",
    )
    .bind(&full_name)
    .bind(&email)
    .bind(&mobile)
    .bind(&village)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    full_name: String,
    email: String,
    mobile: String,
    village: String,
    password: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// The citizen's profile: account details plus every application they have
/// submitted, newest first.
#[cfg(feature = "server")]
#[get("/api/user/profile", session: tower_sessions::Session)]
pub async fn get_profile() -> Result<ProfileInfo, ServerFnError> {
    use crate::db::get_pool;

    let user = auth::require_user(&session).await?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<models::ApplicationRow> = sqlx::query_as(
        "SELECT * FROM service_applications WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user.id)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(ProfileInfo {
        user: user.to_info(),
        applications: rows.iter().map(|r| r.to_info()).collect(),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/user/profile")]
pub async fn get_profile() -> Result<ProfileInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
