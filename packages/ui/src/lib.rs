//! This crate contains the shared UI building blocks of the portal: the
//! session context, route guards, toasts, the confirmation dialog, file
//! pickers, and the page chrome.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, redirect_to};

mod guards;
pub use guards::{RequireAdmin, RequireAuth};

mod toast;
pub use toast::{use_toasts, ToastKind, ToastProvider, Toasts};

mod confirm;
pub use confirm::ConfirmDialog;

mod files;
pub use files::{mime_for, read_first_file, SelectedFile};

mod remote;
pub use remote::{friendly_error, is_auth_error, mutate_then_reload};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod status;
pub use status::{application_status_class, complaint_status_class, project_status_class, StatusBadge};
