//! Route guards: pure predicates over the session state. Client-side
//! convenience only — every protected server function re-checks the session
//! and role on its own.

use dioxus::prelude::*;

use crate::auth::{redirect_to, use_auth};

/// Renders its children only for a logged-in user (any role); otherwise
/// redirects to the login view.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            p { class: "guard-loading", "Loading..." }
        };
    }

    if !auth().is_logged_in() {
        redirect_to("/login");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Renders its children only for a logged-in admin; otherwise redirects to
/// the login view.
#[component]
pub fn RequireAdmin(children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            p { class: "guard-loading", "Loading..." }
        };
    }

    if !auth().is_admin() {
        redirect_to("/login");
        return rsx! {};
    }

    rsx! {
        {children}
    }
}
