//! Registration page.

use leptos::prelude::*;

use crate::net::auth_flow;
use crate::net::types::NewUser;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::validate;

/// Registration page. A successful signup logs the user straight in, at
/// which point the restricted guard bounces them to the contacts page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <h1 class="auth-page__title">"Create your account"</h1>
            <RegisterForm/>
            <p class="auth-page__switch">
                "Already registered? "
                <a class="auth-page__link" href="/login">"Log in"</a>
                " instead."
            </p>
        </div>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let name_error = move || {
        let value = name.get();
        if value.is_empty() {
            None
        } else {
            validate::name(&value).err()
        }
    };
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
        validate::name(&name.get()).is_ok()
            && validate::email(&email.get()).is_ok()
            && validate::password(&password.get()).is_ok()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() {
            return;
        }
        auth_flow::spawn_register(
            session,
            ui,
            NewUser {
                name: name.get().trim().to_owned(),
                email: email.get().trim().to_owned(),
                password: password.get(),
            },
        );
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__field">
                "Name"
                <input
                    class="auth-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <span class="auth-form__error">{name_error}</span>
            </label>

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
                "Register"
            </button>
        </form>
    }
}
