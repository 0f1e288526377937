//! Contact list store: items, request flags, and the edit/delete dialogs.

#[cfg(test)]
#[path = "contacts_test.rs"]
mod contacts_test;

use crate::net::api::ApiError;
use crate::net::types::Contact;
use crate::state::session::ErrorInfo;

/// State backing the contacts page.
///
/// `current` is the contact selected for editing or deletion; the dialog
/// flags never outlive it. A single `loading` flag covers every contact
/// operation, and the add/edit forms disable their submit controls while
/// it is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactsState {
    pub items: Vec<Contact>,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub current: Option<Contact>,
    pub edit_open: bool,
    pub delete_open: bool,
}

impl ContactsState {
    pub fn fetch_pending(&mut self) {
        self.begin();
    }

    pub fn fetch_fulfilled(&mut self, items: Vec<Contact>) {
        self.items = items;
        self.loading = false;
    }

    pub fn fetch_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn add_pending(&mut self) {
        self.begin();
    }

    /// The server issued an id; append the stored contact.
    pub fn add_fulfilled(&mut self, contact: Contact) {
        self.items.push(contact);
        self.loading = false;
    }

    pub fn add_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn edit_pending(&mut self) {
        self.begin();
    }

    /// Replace the stored contact in place and close the edit dialog.
    pub fn edit_fulfilled(&mut self, contact: Contact) {
        if let Some(existing) = self.items.iter_mut().find(|c| c.id == contact.id) {
            *existing = contact;
        }
        self.loading = false;
        self.close_edit();
    }

    /// The dialog stays open so the user can retry or cancel.
    pub fn edit_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn delete_pending(&mut self) {
        self.begin();
    }

    pub fn delete_fulfilled(&mut self, id: &str) {
        self.items.retain(|c| c.id != id);
        self.loading = false;
        self.close_delete();
    }

    pub fn delete_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn open_edit(&mut self, contact: Contact) {
        self.current = Some(contact);
        self.edit_open = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.current = None;
    }

    pub fn open_delete(&mut self, contact: Contact) {
        self.current = Some(contact);
        self.delete_open = true;
    }

    pub fn close_delete(&mut self) {
        self.delete_open = false;
        self.current = None;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn settle_rejected(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(ErrorInfo::from(err));
    }
}

/// Contacts whose name or number contains the query, case-insensitively.
/// An empty or whitespace-only query matches everything.
pub fn filtered(items: &[Contact], query: &str) -> Vec<Contact> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.number.contains(&needle))
        .cloned()
        .collect()
}
