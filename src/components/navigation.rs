//! Header navigation: site links, auth links, and the user menu.
//!
//! Plain anchors are enough here; the router intercepts in-app links for
//! client-side navigation.

use leptos::prelude::*;

use crate::net::auth_flow;
use crate::state::session::SessionState;

/// Site links. The contacts link only appears for authenticated users.
#[component]
pub fn Navigation() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"Phonebook"</a>
            <a class="nav__link" href="/">"Home"</a>
            <Show when=move || session.get().is_logged_in>
                <a class="nav__link" href="/contacts">"Contacts"</a>
            </Show>
        </nav>
    }
}

/// Links to registration and login, shown to anonymous visitors.
#[component]
pub fn AuthNav() -> impl IntoView {
    view! {
        <div class="auth-nav">
            <a class="nav__link" href="/registration">"Register"</a>
            <a class="nav__link" href="/login">"Log in"</a>
        </div>
    }
}

/// Greeting and logout control for an authenticated user.
#[component]
pub fn UserMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map(|u| format!("Welcome, {}", u.name))
            .unwrap_or_default()
    };

    view! {
        <div class="user-menu">
            <span class="user-menu__greeting">{greeting}</span>
            <button
                class="btn"
                on:click=move |_| auth_flow::spawn_logout(session)
                disabled=move || session.get().is_pending
            >
                "Log out"
            </button>
        </div>
    }
}
