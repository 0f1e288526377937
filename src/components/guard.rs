//! Route guard gating pages on the session state.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionState;

/// Outcome of evaluating a guard against a fixed session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect,
}

/// Decide whether a guarded route renders its page or redirects.
///
/// Pure in its inputs: the same session state always yields the same
/// decision, however many times it is evaluated.
pub fn decide(is_logged_in: bool, require_authenticated: bool) -> GuardDecision {
    if is_logged_in == require_authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect
    }
}

/// One guard covers both route flavors: `require_authenticated = true`
/// admits only logged-in users (the contacts page), `false` admits only
/// anonymous visitors (login and registration, which bounce an
/// authenticated user away).
///
/// The shell keeps every guard unmounted until the startup refresh has
/// settled, so `is_logged_in` is never read from a half-restored session.
#[component]
pub fn Guard(
    require_authenticated: bool,
    redirect_to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        {move || match decide(session.get().is_logged_in, require_authenticated) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::Redirect => view! { <Redirect path=redirect_to/> }.into_any(),
        }}
    }
}
