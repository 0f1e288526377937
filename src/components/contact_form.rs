//! Add-contact form with inline validation.

use leptos::prelude::*;

use crate::components::toaster;
use crate::net::contacts_flow;
use crate::net::types::ContactPayload;
use crate::state::contacts::ContactsState;
use crate::state::session::SessionState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::validate;

/// Form for adding a new contact.
///
/// Validation messages appear once a field has content; duplicates by
/// name are rejected client-side before any request is made. The submit
/// control is disabled while the form is invalid or a contact operation
/// is in flight.
#[component]
pub fn ContactForm() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contacts = expect_context::<RwSignal<ContactsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let number = RwSignal::new(String::new());

    let name_error = move || {
        let value = name.get();
        if value.is_empty() {
            None
        } else {
            validate::name(&value).err()
        }
    };
    let number_error = move || {
        let value = number.get();
        if value.is_empty() {
            None
        } else {
            validate::number(&value).err()
        }
    };
    let form_valid =
        move || validate::name(&name.get()).is_ok() && validate::number(&number.get()).is_ok();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form_valid() {
            return;
        }
        let trimmed_name = name.get().trim().to_owned();
        let duplicate = contacts
            .get_untracked()
            .items
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&trimmed_name));
        if duplicate {
            toaster::notify(
                ui,
                ToastKind::Error,
                &format!("{trimmed_name} is already in your contacts."),
            );
            return;
        }
        contacts_flow::spawn_add_contact(
            session,
            contacts,
            ui,
            ContactPayload {
                name: trimmed_name,
                number: number.get().trim().to_owned(),
            },
        );
        name.set(String::new());
        number.set(String::new());
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label class="contact-form__field">
                "Name"
                <input
                    class="contact-form__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <span class="contact-form__error">{name_error}</span>
            </label>

            <label class="contact-form__field">
                "Number"
                <input
                    class="contact-form__input"
                    type="tel"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
                <span class="contact-form__error">{number_error}</span>
            </label>

            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || !form_valid() || contacts.get().loading
            >
                "Add contact"
            </button>
        </form>
    }
}
