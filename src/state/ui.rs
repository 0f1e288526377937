//! UI state: the contact list filter and the notification queue.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A fire-and-forget notification. Nothing consumes a result from it; it
/// is displayed until dismissed by a timer or the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: uuid::Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub filter: String,
    pub toasts: Vec<Toast>,
}

impl UiState {
    pub fn set_filter(&mut self, value: String) {
        self.filter = value;
    }

    /// Queue a notification and return its id for later dismissal.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> uuid::Uuid {
        let id = uuid::Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Dismissal is idempotent; an unknown id is a no-op.
    pub fn dismiss_toast(&mut self, id: uuid::Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}
