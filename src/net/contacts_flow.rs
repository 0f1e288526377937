//! Contact list operation flows: fetch, add, edit, delete.
//!
//! Same shape as the auth flows: one pending dispatch, one settling
//! dispatch, failures surfaced as notifications and recorded in the
//! store. The bearer token is read from the session store at spawn time.

#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;
use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

use crate::net::types::ContactPayload;
use crate::state::contacts::ContactsState;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::components::toaster;
#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::state::ui::ToastKind;

/// Load the contact list. Triggered once when the contacts page mounts;
/// a flight already in progress is not duplicated.
pub fn spawn_fetch_contacts(
    session: RwSignal<SessionState>,
    contacts: RwSignal<ContactsState>,
    ui: RwSignal<UiState>,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        if contacts.get_untracked().loading {
            return;
        }
        leptos::task::spawn_local(async move {
            contacts.update(ContactsState::fetch_pending);
            match api::fetch_contacts(&token).await {
                Ok(items) => {
                    contacts.update(|c| c.fetch_fulfilled(items));
                }
                Err(err) => {
                    contacts.update(|c| c.fetch_rejected(&err));
                    toaster::notify(ui, ToastKind::Error, "Could not load your contacts.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contacts, ui);
    }
}

/// Store a new contact.
pub fn spawn_add_contact(
    session: RwSignal<SessionState>,
    contacts: RwSignal<ContactsState>,
    ui: RwSignal<UiState>,
    payload: ContactPayload,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            contacts.update(ContactsState::add_pending);
            match api::add_contact(&token, &payload).await {
                Ok(contact) => {
                    let name = contact.name.clone();
                    contacts.update(|c| c.add_fulfilled(contact));
                    toaster::notify(ui, ToastKind::Success, &format!("{name} added."));
                }
                Err(err) => {
                    contacts.update(|c| c.add_rejected(&err));
                    toaster::notify(ui, ToastKind::Error, "Could not add the contact.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contacts, ui, payload);
    }
}

/// Save changes to an existing contact. On success the edit dialog
/// closes; on failure it stays open so the user can retry or cancel.
pub fn spawn_update_contact(
    session: RwSignal<SessionState>,
    contacts: RwSignal<ContactsState>,
    ui: RwSignal<UiState>,
    id: String,
    payload: ContactPayload,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            contacts.update(ContactsState::edit_pending);
            match api::update_contact(&token, &id, &payload).await {
                Ok(contact) => {
                    contacts.update(|c| c.edit_fulfilled(contact));
                    toaster::notify(ui, ToastKind::Success, "Changes saved.");
                }
                Err(err) => {
                    contacts.update(|c| c.edit_rejected(&err));
                    toaster::notify(ui, ToastKind::Error, "Could not save the changes.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contacts, ui, id, payload);
    }
}

/// Remove a contact. Same dialog policy as editing.
pub fn spawn_delete_contact(
    session: RwSignal<SessionState>,
    contacts: RwSignal<ContactsState>,
    ui: RwSignal<UiState>,
    id: String,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = session.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            contacts.update(ContactsState::delete_pending);
            match api::delete_contact(&token, &id).await {
                Ok(removed) => {
                    contacts.update(|c| c.delete_fulfilled(&removed.id));
                    toaster::notify(ui, ToastKind::Success, "Contact deleted.");
                }
                Err(err) => {
                    contacts.update(|c| c.delete_rejected(&err));
                    toaster::notify(ui, ToastKind::Error, "Could not delete the contact.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, contacts, ui, id);
    }
}
