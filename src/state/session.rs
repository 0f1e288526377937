//! Session store: current user, credential, and lifecycle flags.
//!
//! Transitions follow the pending -> fulfilled | rejected shape of every
//! asynchronous operation in the app. Each transition is a total function
//! of the current state with no side effects; the flows in
//! [`crate::net::auth_flow`] are responsible for ordering them around the
//! actual network calls.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;
use crate::net::types::User;

/// Last-failure marker kept in the session store.
///
/// Set by a rejected transition, cleared by the next pending or fulfilled
/// one. Read by notification code, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorInfo {
    pub status: Option<u16>,
    pub message: String,
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// Authentication state for the current browser session.
///
/// Invariants:
/// - `is_logged_in` implies `token.is_some()`; only the `*_fulfilled`
///   transitions set either, and they set both together.
/// - `is_refreshing` starts `true` and is cleared exactly once, by
///   whichever of `refresh_fulfilled` / `refresh_rejected` /
///   `refresh_skipped` settles the startup refresh. The shell keeps every
///   route (and therefore every guard) unmounted until that happens.
/// - every settling transition leaves both `is_refreshing` and
///   `is_pending` false, so nothing can hang in a permanently pending
///   state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_logged_in: bool,
    pub is_refreshing: bool,
    /// A user-triggered auth call (login/register/logout) is in flight.
    /// Forms disable their submit control while this is set.
    pub is_pending: bool,
    pub error: Option<ErrorInfo>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_logged_in: false,
            // True from the first render so guards never see a
            // half-restored session.
            is_refreshing: true,
            is_pending: false,
            error: None,
        }
    }
}

impl SessionState {
    pub fn login_pending(&mut self) {
        self.begin_attempt();
    }

    pub fn login_fulfilled(&mut self, user: User, token: String) {
        self.settle_authenticated(user, token);
    }

    pub fn login_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn register_pending(&mut self) {
        self.begin_attempt();
    }

    pub fn register_fulfilled(&mut self, user: User, token: String) {
        self.settle_authenticated(user, token);
    }

    pub fn register_rejected(&mut self, err: &ApiError) {
        self.settle_rejected(err);
    }

    pub fn logout_pending(&mut self) {
        self.begin_attempt();
    }

    /// Local session clears regardless of how the logout call went, so the
    /// user is never stuck logged in against a broken backend.
    pub fn logout_fulfilled(&mut self) {
        self.settle_anonymous();
        self.error = None;
    }

    /// Startup refresh began. Only the startup controller dispatches this,
    /// and only once per application lifetime.
    pub fn refresh_pending(&mut self) {
        self.is_refreshing = true;
        self.error = None;
    }

    pub fn refresh_fulfilled(&mut self, user: User, token: String) {
        self.settle_authenticated(user, token);
    }

    pub fn refresh_rejected(&mut self, err: &ApiError) {
        self.settle_anonymous();
        self.error = Some(ErrorInfo::from(err));
    }

    /// No persisted token was found; settle as anonymous without a network
    /// round trip.
    pub fn refresh_skipped(&mut self) {
        self.settle_anonymous();
        self.error = None;
    }

    fn begin_attempt(&mut self) {
        self.is_pending = true;
        self.error = None;
    }

    fn settle_authenticated(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_logged_in = true;
        self.is_refreshing = false;
        self.is_pending = false;
        self.error = None;
    }

    fn settle_rejected(&mut self, err: &ApiError) {
        self.settle_anonymous();
        self.error = Some(ErrorInfo::from(err));
    }

    fn settle_anonymous(&mut self) {
        self.user = None;
        self.token = None;
        self.is_logged_in = false;
        self.is_refreshing = false;
        self.is_pending = false;
    }
}

/// Shell state machine: a loading screen while the session is being
/// restored, the routed page tree afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShellPhase {
    #[default]
    Restoring,
    Ready,
}

impl ShellPhase {
    /// Advance the shell once the startup refresh has settled.
    ///
    /// `Restoring` moves to `Ready` exactly once; `Ready` never goes back,
    /// so later login/logout cycles do not re-show the loading screen.
    pub fn advance(self, refresh_settled: bool) -> Self {
        match (self, refresh_settled) {
            (Self::Restoring, true) => Self::Ready,
            (phase, _) => phase,
        }
    }
}
