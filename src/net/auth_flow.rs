//! Session lifecycle controller: startup refresh, login, registration,
//! and logout flows.
//!
//! Each flow is a spawned local task with the pending -> fulfilled |
//! rejected shape: exactly one settling dispatch, no retry, no timeout
//! extension. Persisted-token writes and clears happen before the
//! corresponding store dispatch, so nothing can observe a settled session
//! whose persistence disagrees with it.
//!
//! All network work is gated behind `#[cfg(feature = "hydrate")]`; native
//! builds settle immediately into an anonymous session.

#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
use leptos::prelude::{RwSignal, Update};

use crate::net::types::{Credentials, NewUser};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::components::toaster;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;
#[cfg(feature = "hydrate")]
use crate::util::token_storage;

/// Restore the session from the persisted token.
///
/// Runs exactly once per application lifetime, triggered by the root
/// component before any guarded route is mounted. Without a persisted
/// token the store settles immediately; otherwise a single
/// `GET /users/current` attempt decides the outcome. A failed refresh is
/// silent to the user: the session simply stays anonymous.
pub fn spawn_session_refresh(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = token_storage::read() else {
                session.update(SessionState::refresh_skipped);
                return;
            };
            session.update(SessionState::refresh_pending);
            match api::fetch_current_user(&token).await {
                Ok(user) => {
                    session.update(|s| s.refresh_fulfilled(user, token));
                }
                Err(err) => {
                    // Clear the dead token before the store settles.
                    token_storage::clear();
                    leptos::logging::warn!("session refresh failed: {err}");
                    session.update(|s| s.refresh_rejected(&err));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        session.update(SessionState::refresh_skipped);
    }
}

/// Log in with the given credentials.
///
/// Bails out if another auth call is already in flight, so a double
/// submit cannot race two requests against the store.
pub fn spawn_login(
    session: RwSignal<SessionState>,
    ui: RwSignal<UiState>,
    credentials: Credentials,
) {
    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().is_pending {
            return;
        }
        leptos::task::spawn_local(async move {
            session.update(SessionState::login_pending);
            match api::login(&credentials).await {
                Ok(auth) => {
                    token_storage::write(&auth.token);
                    session.update(|s| s.login_fulfilled(auth.user, auth.token));
                    toaster::notify(ui, ToastKind::Success, "Successful login!");
                }
                Err(err) => {
                    session.update(|s| s.login_rejected(&err));
                    toaster::notify(
                        ui,
                        ToastKind::Error,
                        "Login unsuccessful. Please verify your email and password.",
                    );
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, ui, credentials);
    }
}

/// Register a new account and log straight into it.
pub fn spawn_register(session: RwSignal<SessionState>, ui: RwSignal<UiState>, new_user: NewUser) {
    #[cfg(feature = "hydrate")]
    {
        if session.get_untracked().is_pending {
            return;
        }
        leptos::task::spawn_local(async move {
            session.update(SessionState::register_pending);
            match api::signup(&new_user).await {
                Ok(auth) => {
                    token_storage::write(&auth.token);
                    session.update(|s| s.register_fulfilled(auth.user, auth.token));
                    toaster::notify(ui, ToastKind::Success, "Registration successful!");
                }
                Err(err) => {
                    session.update(|s| s.register_rejected(&err));
                    toaster::notify(
                        ui,
                        ToastKind::Error,
                        "Registration unsuccessful. Please check the form and try again.",
                    );
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, ui, new_user);
    }
}

/// Log out. The server call is best-effort: the persisted token and the
/// local session clear regardless of the outcome, so the user is never
/// stuck logged in against an unreachable backend.
pub fn spawn_logout(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        let state = session.get_untracked();
        if state.is_pending {
            return;
        }
        let Some(token) = state.token else {
            return;
        };
        leptos::task::spawn_local(async move {
            session.update(SessionState::logout_pending);
            let result = api::logout(&token).await;
            token_storage::clear();
            session.update(SessionState::logout_fulfilled);
            if let Err(err) = result {
                leptos::logging::warn!("logout request failed: {err}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
