//! Helpers around server-function calls.
//!
//! [`mutate_then_reload`] encodes the one ordering rule every manager view
//! relies on: a list refetch only starts after the triggering mutation has
//! resolved, so the displayed list reflects at least this client's latest
//! write. When the mutation fails the reload is skipped and the caller's
//! form state stays put for correction.

use std::future::Future;

use dioxus::prelude::ServerFnError;

/// Run a mutation, and only once it succeeds run the reload.
pub async fn mutate_then_reload<T, E, M, MF, R, RF>(mutate: M, reload: R) -> Result<T, E>
where
    M: FnOnce() -> MF,
    MF: Future<Output = Result<T, E>>,
    R: FnOnce() -> RF,
    RF: Future<Output = ()>,
{
    let value = mutate().await?;
    reload().await;
    Ok(value)
}

/// True when the failure means the session is gone and the user must log in
/// again — the caller should clear the auth state and redirect.
pub fn is_auth_error(err: &ServerFnError) -> bool {
    matches!(err, ServerFnError::ServerError { message, .. } if message.contains(api::auth::NOT_AUTHENTICATED))
}

/// A user-facing message for a failed call: the server's own message when
/// it sent one, a generic line for transport-level failures.
pub fn friendly_error(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError { message, .. } => message.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn reload_runs_only_after_a_successful_mutation() {
        let order = Cell::new(0u8);

        let result: Result<u8, &str> = mutate_then_reload(
            || async {
                assert_eq!(order.get(), 0);
                order.set(1);
                Ok(7)
            },
            || async {
                assert_eq!(order.get(), 1, "reload must wait for the mutation");
                order.set(2);
            },
        )
        .await;

        assert_eq!(result, Ok(7));
        assert_eq!(order.get(), 2);
    }

    #[tokio::test]
    async fn failed_mutation_skips_the_reload() {
        let reloaded = Cell::new(false);

        let result: Result<(), &str> = mutate_then_reload(
            || async { Err("backend rejected it") },
            || async {
                reloaded.set(true);
            },
        )
        .await;

        assert_eq!(result, Err("backend rejected it"));
        assert!(!reloaded.get());
    }
}
