use super::*;

fn ann() -> User {
    User {
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
    }
}

fn assert_settled(state: &SessionState) {
    assert!(!state.is_refreshing);
    assert!(!state.is_pending);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_logged_in);
    assert!(state.error.is_none());
}

#[test]
fn default_session_is_refreshing() {
    // Guards must not trust the session before the startup refresh
    // settles, so the store starts in the refreshing state.
    let state = SessionState::default();
    assert!(state.is_refreshing);
    assert!(!state.is_pending);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_pending_sets_pending_and_clears_error() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.login_rejected(&ApiError::Auth);
    assert!(state.error.is_some());

    state.login_pending();
    assert!(state.is_pending);
    assert!(state.error.is_none());
}

#[test]
fn login_fulfilled_authenticates_and_settles() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.login_pending();
    state.login_fulfilled(ann(), "abc".to_owned());

    assert!(state.is_logged_in);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user, Some(ann()));
    assert!(state.error.is_none());
    assert_settled(&state);
}

#[test]
fn login_rejected_records_error_and_settles() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.login_pending();
    state.login_rejected(&ApiError::Auth);

    assert!(!state.is_logged_in);
    assert!(state.token.is_none());
    let error = state.error.as_ref().expect("error recorded");
    assert_eq!(error.status, Some(401));
    assert_settled(&state);
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_fulfilled_authenticates() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.register_pending();
    state.register_fulfilled(ann(), "tok".to_owned());

    assert!(state.is_logged_in);
    assert!(state.token.is_some());
    assert_settled(&state);
}

#[test]
fn register_rejected_settles_anonymous() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.register_pending();
    state.register_rejected(&ApiError::Validation("bad email".to_owned()));

    assert!(!state.is_logged_in);
    assert_eq!(state.error.as_ref().and_then(|e| e.status), Some(400));
    assert_settled(&state);
}

// =============================================================
// Refresh lifecycle
// =============================================================

#[test]
fn refresh_fulfilled_restores_the_session() {
    let mut state = SessionState::default();
    state.refresh_pending();
    assert!(state.is_refreshing);

    state.refresh_fulfilled(ann(), "abc".to_owned());
    assert!(state.is_logged_in);
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_settled(&state);
}

#[test]
fn refresh_rejected_yields_anonymous_session() {
    let mut state = SessionState::default();
    state.refresh_pending();
    state.refresh_rejected(&ApiError::ExpiredToken);

    assert!(!state.is_logged_in);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.error.is_some());
    assert_settled(&state);
}

#[test]
fn refresh_skipped_settles_without_error() {
    let mut state = SessionState::default();
    state.refresh_skipped();

    assert!(!state.is_logged_in);
    assert!(state.error.is_none());
    assert_settled(&state);
}

// =============================================================
// Invariants across transition sequences
// =============================================================

#[test]
fn no_settling_transition_leaves_flags_set() {
    let settled: Vec<SessionState> = {
        let mut states = Vec::new();

        let mut s = SessionState::default();
        s.refresh_pending();
        s.refresh_fulfilled(ann(), "t".to_owned());
        states.push(s);

        let mut s = SessionState::default();
        s.refresh_pending();
        s.refresh_rejected(&ApiError::Network("offline".to_owned()));
        states.push(s);

        let mut s = SessionState::default();
        s.refresh_skipped();
        s.login_pending();
        s.login_rejected(&ApiError::Auth);
        states.push(s);

        let mut s = SessionState::default();
        s.refresh_skipped();
        s.register_pending();
        s.register_fulfilled(ann(), "t".to_owned());
        states.push(s);

        let mut s = SessionState::default();
        s.refresh_pending();
        s.refresh_fulfilled(ann(), "t".to_owned());
        s.logout_pending();
        s.logout_fulfilled();
        states.push(s);

        states
    };

    for state in settled {
        assert!(!state.is_refreshing, "{state:?}");
        assert!(!state.is_pending, "{state:?}");
    }
}

#[test]
fn logged_in_implies_token() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.login_pending();
    state.login_fulfilled(ann(), "abc".to_owned());
    assert!(state.is_logged_in && state.token.is_some());

    state.logout_pending();
    state.logout_fulfilled();
    assert!(!state.is_logged_in && state.token.is_none());
}

#[test]
fn fulfilled_clears_previous_error() {
    let mut state = SessionState::default();
    state.refresh_skipped();
    state.login_pending();
    state.login_rejected(&ApiError::Auth);
    assert!(state.error.is_some());

    state.login_pending();
    state.login_fulfilled(ann(), "abc".to_owned());
    assert!(state.error.is_none());
}

// =============================================================
// Full lifecycle sequences
// =============================================================

#[test]
fn scenario_no_persisted_token_reaches_anonymous_ready() {
    // No token: the controller skips the network call entirely.
    let mut state = SessionState::default();
    state.refresh_skipped();

    assert!(!state.is_logged_in);
    assert_settled(&state);
    // The contacts route would now redirect to /login.
}

#[test]
fn scenario_valid_token_restores_ann() {
    let mut state = SessionState::default();
    state.refresh_pending();
    state.refresh_fulfilled(ann(), "abc".to_owned());

    assert!(state.is_logged_in);
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ann"));
    assert_eq!(state.token.as_deref(), Some("abc"));
}

#[test]
fn scenario_expired_token_clears_session() {
    let mut state = SessionState::default();
    state.refresh_pending();
    state.refresh_rejected(&ApiError::ExpiredToken);

    assert!(!state.is_logged_in);
    assert!(state.token.is_none());
    assert_eq!(state.error.as_ref().and_then(|e| e.status), Some(401));
}

#[test]
fn scenario_logout_clears_locally_despite_network_error() {
    let mut state = SessionState::default();
    state.refresh_pending();
    state.refresh_fulfilled(ann(), "abc".to_owned());

    // The flow dispatches logout_fulfilled even when the request failed.
    state.logout_pending();
    state.logout_fulfilled();

    assert!(!state.is_logged_in);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert_settled(&state);
}

// =============================================================
// ErrorInfo
// =============================================================

#[test]
fn error_info_maps_status_and_message() {
    let info = ErrorInfo::from(&ApiError::Http(500));
    assert_eq!(info.status, Some(500));
    assert!(info.message.contains("500"));

    let info = ErrorInfo::from(&ApiError::Network("timed out".to_owned()));
    assert_eq!(info.status, None);
    assert!(info.message.contains("timed out"));
}

// =============================================================
// ShellPhase
// =============================================================

#[test]
fn shell_starts_restoring() {
    assert_eq!(ShellPhase::default(), ShellPhase::Restoring);
}

#[test]
fn shell_stays_restoring_while_refresh_is_unsettled() {
    // A never-resolving refresh keeps the loading screen up indefinitely.
    let mut phase = ShellPhase::Restoring;
    for _ in 0..3 {
        phase = phase.advance(false);
        assert_eq!(phase, ShellPhase::Restoring);
    }
}

#[test]
fn shell_becomes_ready_once_settled() {
    let phase = ShellPhase::Restoring.advance(true);
    assert_eq!(phase, ShellPhase::Ready);
}

#[test]
fn shell_never_reenters_restoring() {
    // Login/logout after startup flips is_refreshing to... nothing; even a
    // hypothetical unsettled reading must not bring the loading screen back.
    let phase = ShellPhase::Ready.advance(false);
    assert_eq!(phase, ShellPhase::Ready);
    let phase = ShellPhase::Ready.advance(true);
    assert_eq!(phase, ShellPhase::Ready);
}
