//! Modal dialog for editing an existing contact.

use leptos::prelude::*;

use crate::net::contacts_flow;
use crate::net::types::ContactPayload;
use crate::state::contacts::ContactsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::validate;

/// Edit dialog seeded from the selected contact.
///
/// Mounted inside a `Show` gated on `edit_open`, so the field signals are
/// created fresh from the current selection every time the dialog opens.
/// On success the dialog closes via the store transition; on failure it
/// stays open so the user can retry or cancel.
#[component]
pub fn EditModal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let contacts = expect_context::<RwSignal<ContactsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let initial = contacts.get_untracked().current.unwrap_or_default();
    let id = initial.id;
    let name = RwSignal::new(initial.name);
    let number = RwSignal::new(initial.number);

    let name_error = move || validate::name(&name.get()).err();
    let number_error = move || validate::number(&number.get()).err();
    let form_valid =
        move || validate::name(&name.get()).is_ok() && validate::number(&number.get()).is_ok();

    let on_save = move |_| {
        if !form_valid() {
            return;
        }
        contacts_flow::spawn_update_contact(
            session,
            contacts,
            ui,
            id.clone(),
            ContactPayload {
                name: name.get().trim().to_owned(),
                number: number.get().trim().to_owned(),
            },
        );
    };
    let on_cancel = move |_| contacts.update(ContactsState::close_edit);

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Edit your contact"</h2>

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <span class="contact-form__error">{name_error}</span>
                </label>

                <label class="dialog__label">
                    "Number"
                    <input
                        class="dialog__input"
                        type="tel"
                        prop:value=move || number.get()
                        on:input=move |ev| number.set(event_target_value(&ev))
                    />
                    <span class="contact-form__error">{number_error}</span>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        on:click=on_save
                        disabled=move || !form_valid() || contacts.get().loading
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
