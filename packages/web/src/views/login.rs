//! Combined login / registration view, toggling between the two forms.

use dioxus::prelude::*;

use ui::{friendly_error, use_auth, AuthState};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut is_login = use_signal(|| true);

    // Common fields
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Registration only
    let mut full_name = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut village = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: go straight to the profile.
    if !auth().loading && auth().is_logged_in() {
        nav.replace(Route::Profile {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            if is_login() {
                loading.set(true);
                match api::login(e, p).await {
                    Ok(user) => {
                        let is_admin = user.is_admin();
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                        });
                        if is_admin {
                            nav.push(Route::AdminDashboard {});
                        } else {
                            nav.push(Route::Profile {});
                        }
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(friendly_error(&err)));
                    }
                }
            } else {
                let n = full_name().trim().to_string();
                if let Err(msg) = domain::validate::validate_full_name(&n) {
                    error.set(Some(msg));
                    return;
                }
                if let Err(msg) = domain::validate::validate_mobile(mobile().trim()) {
                    error.set(Some(msg));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                if p != confirm_password() {
                    error.set(Some("Passwords do not match".to_string()));
                    return;
                }

                loading.set(true);
                match api::register(n, e, mobile().trim().to_string(), village().trim().to_string(), p).await {
                    Ok(user) => {
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                        });
                        nav.push(Route::Profile {});
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(friendly_error(&err)));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", if is_login() { "Citizen Login" } else { "Create Account" } }
            p {
                class: "auth-subtitle",
                if is_login() {
                    "Sign in to apply for services and track applications"
                } else {
                    "Register once and apply for any Panchayat service"
                }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                if !is_login() {
                    input {
                        r#type: "text",
                        placeholder: "Full name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                if !is_login() {
                    input {
                        r#type: "tel",
                        placeholder: "Mobile number",
                        value: mobile(),
                        oninput: move |evt: FormEvent| mobile.set(evt.value()),
                    }
                    input {
                        r#type: "text",
                        placeholder: "Village",
                        value: village(),
                        oninput: move |evt: FormEvent| village.set(evt.value()),
                    }
                }

                input {
                    r#type: "password",
                    placeholder: if is_login() { "Password" } else { "Password (min 8 characters)" },
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if !is_login() {
                    input {
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        if is_login() { "Signing in..." } else { "Creating account..." }
                    } else {
                        if is_login() { "Sign in" } else { "Sign up" }
                    }
                }
            }

            p {
                class: "auth-toggle",
                if is_login() { "New to the portal? " } else { "Already have an account? " }
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        error.set(None);
                        is_login.toggle();
                    },
                    if is_login() { "Create an account" } else { "Sign in" }
                }
            }
        }
    }
}
