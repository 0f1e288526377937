//! Login page.

use leptos::prelude::*;

use crate::net::auth_flow;
use crate::net::types::Credentials;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::validate;

/// Login page with the credentials form and a registration link.
/// Only reachable anonymously; the guard bounces logged-in users to the
/// contacts page, including right after a successful login here.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Welcome back!"</h1>
            <LoginForm/>
            <p class="auth-page__switch">
                "Don't have an account? "
                <a class="auth-page__link" href="/registration">"Sign up"</a>
                " now!"
            </p>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let email_error = move || {
        let value = email.get();
        if value.is_empty() {
            None
        } else {
            validate::email(&value).err()
        }
    };
    let password_error = move || {
        let value = password.get();
        if value.is_empty() {
            None
        } else {
            validate::password(&value).err()
        }
    };
    let form_valid = move || {
        validate::email(&email.get()).is_ok() && validate::password(&password.get()).is_ok()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() {
            return;
        }
        auth_flow::spawn_login(
            session,
            ui,
            Credentials {
                email: email.get().trim().to_owned(),
                password: password.get(),
            },
        );
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__field">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <span class="auth-form__error">{email_error}</span>
            </label>

            <label class="auth-form__field">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <span class="auth-form__error">{password_error}</span>
            </label>

            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !form_valid() || session.get().is_pending
            >
                "Log in"
            </button>
        </form>
    }
}
