//! # Sessions, passwords, and role checks
//!
//! The session stores only the user's id under [`SESSION_USER_ID_KEY`];
//! everything else is looked up per request. [`require_user`] and
//! [`require_admin`] are the server-side gates every protected server
//! function goes through — the client-side route guards are convenience
//! only and are never trusted.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings.

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Message returned when no session user exists. The UI recognises this
/// string and forces a logout + redirect to the login view.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

#[cfg(feature = "server")]
pub use server::*;

#[cfg(feature = "server")]
mod server {
    use argon2::{
        password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
        Argon2,
    };
    use dioxus::prelude::ServerFnError;
    use tower_sessions::Session;

    use super::{NOT_AUTHENTICATED, SESSION_USER_ID_KEY};
    use crate::db::get_pool;
    use crate::models::User;

    /// Hash a password with Argon2id. Returns a PHC-format string.
    pub fn hash_password(password: &str) -> Result<String, String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| format!("Failed to hash password: {e}"))
    }

    /// Verify a password against a stored PHC-format hash.
    pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
        let parsed = PasswordHash::new(hash).map_err(|e| format!("Invalid password hash: {e}"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Load the session's user, if any.
    pub async fn session_user(session: &Session) -> Result<Option<User>, ServerFnError> {
        let user_id: Option<String> = session
            .get(SESSION_USER_ID_KEY)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let Some(user_id) = user_id else {
            return Ok(None);
        };

        let user_uuid = uuid::Uuid::parse_str(&user_id)
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        let pool = get_pool()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

        sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(user_uuid)
            .fetch_optional(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))
    }

    /// The session must belong to a logged-in user.
    pub async fn require_user(session: &Session) -> Result<User, ServerFnError> {
        session_user(session)
            .await?
            .ok_or_else(|| ServerFnError::new(NOT_AUTHENTICATED))
    }

    /// The session must belong to a logged-in admin.
    pub async fn require_admin(session: &Session) -> Result<User, ServerFnError> {
        let user = require_user(session).await?;
        if !user.is_admin() {
            return Err(ServerFnError::new("Admin access required"));
        }
        Ok(user)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn hash_and_verify_round_trip() {
            let hash = hash_password("gram-panchayat").unwrap();
            assert!(hash.starts_with("$argon2"));
            assert!(verify_password("gram-panchayat", &hash).unwrap());
            assert!(!verify_password("wrong-password", &hash).unwrap());
        }

        #[test]
        fn malformed_hash_is_an_error_not_a_mismatch() {
            assert!(verify_password("anything", "not-a-phc-string").is_err());
        }
    }
}
