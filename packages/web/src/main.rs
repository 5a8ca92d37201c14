use dioxus::prelude::*;

use ui::{AuthProvider, Footer, LogoutButton, Navbar, ToastProvider, use_auth};
use views::admin::{
    AdminComplaints, AdminContacts, AdminDashboard, AdminDevelopment, AdminGallery, AdminNotices,
    AdminSchemes, AdminServices, AdminVillage,
};
use views::{
    About, ApplyServicePage, Contact, Development, Gallery, Home, Login, MyApplications, Notices,
    Profile, Schemes, Services, SubmitComplaint,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/development")]
        Development {},
        #[route("/gallery")]
        Gallery {},
        #[route("/notices")]
        Notices {},
        #[route("/schemes")]
        Schemes {},
        #[route("/services")]
        Services {},
        #[route("/login")]
        Login {},
        #[route("/profile")]
        Profile {},
        #[route("/apply-service?:service")]
        ApplyServicePage { service: String },
        #[route("/application-status")]
        MyApplications {},
        #[route("/complaint")]
        SubmitComplaint {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/notices")]
        AdminNotices {},
        #[route("/admin/services")]
        AdminServices {},
        #[route("/admin/schemes")]
        AdminSchemes {},
        #[route("/admin/gallery")]
        AdminGallery {},
        #[route("/admin/complaints")]
        AdminComplaints {},
        #[route("/admin/development")]
        AdminDevelopment {},
        #[route("/admin/contacts")]
        AdminContacts {},
        #[route("/admin/village")]
        AdminVillage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to migrate session store");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    bootstrap_admin(pool).await;

    // Build the Dioxus app with the uploads route in front
    let router = axum::Router::new()
        .route("/uploads/{*path}", get(serve_upload))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

/// Serve a stored upload. The path is resolved through the uploads module,
/// which refuses anything pointing outside the uploads directory.
#[cfg(feature = "server")]
async fn serve_upload(
    axum::extract::Path(path): axum::extract::Path<String>,
) -> axum::response::Response {
    use axum::http::{header, StatusCode};
    use axum::response::IntoResponse;

    let Some(full) = api::uploads::resolve_upload_path(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let content_type = match full.extension().and_then(|e| e.to_str()) {
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("png") => "image/png",
                Some("pdf") => "application/pdf",
                _ => "application/octet-stream",
            };
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Create the first admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
/// when no admin exists yet. Registration only ever creates citizens.
#[cfg(feature = "server")]
async fn bootstrap_admin(pool: &sqlx::PgPool) {
    let (Ok(email), Ok(password)) = (
        std::env::var("ADMIN_EMAIL"),
        std::env::var("ADMIN_PASSWORD"),
    ) else {
        return;
    };

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 as n FROM users WHERE role = 'admin'")
        .fetch_optional(pool)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        return;
    }

    match api::auth::hash_password(&password) {
        Ok(hash) => {
            let result = sqlx::query(
                "INSERT INTO users (full_name, email, role, password_hash)
                 VALUES ('Administrator', $1, 'admin', $2)
                 ON CONFLICT (email) DO NOTHING",
            )
            .bind(email.trim().to_lowercase())
            .bind(hash)
            .execute(pool)
            .await;
            match result {
                Ok(_) => tracing::info!("bootstrapped admin account {email}"),
                Err(e) => tracing::error!("failed to bootstrap admin account: {e}"),
            }
        }
        Err(e) => tracing::error!("failed to hash admin password: {e}"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Page chrome: the navbar (links vary with the session), the routed page,
/// and the footer.
#[component]
fn SiteLayout() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {
            Link { class: "nav-brand", to: Route::Home {}, "Gram Panchayat" }

            div {
                class: "nav-links",
                Link { to: Route::About {}, "About" }
                Link { to: Route::Notices {}, "Notices" }
                Link { to: Route::Schemes {}, "Schemes" }
                Link { to: Route::Development {}, "Development" }
                Link { to: Route::Gallery {}, "Gallery" }
                Link { to: Route::Services {}, "Services" }
                Link { to: Route::Contact {}, "Contact" }
            }

            div {
                class: "nav-session",
                if auth().is_admin() {
                    Link { class: "nav-admin", to: Route::AdminDashboard {}, "Admin" }
                }
                if auth().is_logged_in() {
                    Link { to: Route::Profile {}, "Profile" }
                    Link { to: Route::MyApplications {}, "My Applications" }
                    LogoutButton { class: "btn btn-link" }
                } else {
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }

        Footer {}
    }
}
