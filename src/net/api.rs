//! HTTP gateway for the remote Connections API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token threaded explicitly into each authenticated call. There is no
//! ambient default header; the session controller owns the current token.
//! Native builds: stubs returning [`ApiError::Network`] so the rest of the
//! crate compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` and the flows degrade store state on
//! failure instead of panicking. Non-success statuses are classified into
//! the [`ApiError`] taxonomy by small pure helpers, one per endpoint
//! family.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthSession, Contact, ContactPayload, Credentials, NewUser, User};

/// Base URL of the remote Connections service.
pub const API_BASE: &str = "https://connections-api.goit.global";

/// Failure taxonomy surfaced by the gateway.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request body.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Bad credentials on login.
    #[error("email or password is incorrect")]
    Auth,
    /// The bearer token is no longer accepted.
    #[error("session expired")]
    ExpiredToken,
    /// Transport-level failure (offline, DNS, aborted request).
    #[error("network error: {0}")]
    Network(String),
    /// Any other non-success HTTP status.
    #[error("server returned status {0}")]
    Http(u16),
}

impl ApiError {
    /// HTTP status associated with the failure, if there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => Some(400),
            Self::Auth | Self::ExpiredToken => Some(401),
            Self::Network(_) => None,
            Self::Http(status) => Some(*status),
        }
    }
}

/// Classify a non-success status from `POST /users/signup`.
fn signup_error(status: u16) -> ApiError {
    if status == 400 {
        ApiError::Validation("malformed registration data".to_owned())
    } else {
        ApiError::Http(status)
    }
}

/// Classify a non-success status from `POST /users/login`. The service
/// answers bad credentials with either 400 or 401.
fn login_error(status: u16) -> ApiError {
    match status {
        400 | 401 => ApiError::Auth,
        other => ApiError::Http(other),
    }
}

/// Classify a non-success status from a bearer-authenticated read.
fn bearer_error(status: u16) -> ApiError {
    if status == 401 {
        ApiError::ExpiredToken
    } else {
        ApiError::Http(status)
    }
}

/// Classify a non-success status from a contact write.
fn contact_error(status: u16) -> ApiError {
    match status {
        400 => ApiError::Validation("malformed contact data".to_owned()),
        401 => ApiError::ExpiredToken,
        other => ApiError::Http(other),
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn offline() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Register a new user via `POST /users/signup`.
///
/// # Errors
///
/// `Validation` on a rejected body, `Network` on transport failure.
pub async fn signup(new_user: &NewUser) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/users/signup"))
            .json(new_user)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(signup_error(resp.status()));
        }
        resp.json::<AuthSession>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_user;
        Err(offline())
    }
}

/// Log a user in via `POST /users/login`.
///
/// # Errors
///
/// `Auth` on bad credentials, `Network` on transport failure.
pub async fn login(credentials: &Credentials) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/users/login"))
            .json(credentials)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(login_error(resp.status()));
        }
        resp.json::<AuthSession>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(offline())
    }
}

/// Invalidate the session server-side via `POST /users/logout`.
///
/// Best-effort: the caller clears local session state whether or not this
/// succeeds.
///
/// # Errors
///
/// `ExpiredToken` if the token was already rejected, `Network` on
/// transport failure.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/users/logout"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(bearer_error(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(offline())
    }
}

/// Fetch the user a persisted token belongs to via `GET /users/current`.
/// The caller pairs the returned user with the token it already holds.
///
/// # Errors
///
/// `ExpiredToken` if the token is no longer accepted, `Network` on
/// transport failure.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_BASE}/users/current"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(bearer_error(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(offline())
    }
}

/// Fetch the full contact list via `GET /contacts`.
///
/// # Errors
///
/// `ExpiredToken` or `Network`.
pub async fn fetch_contacts(token: &str) -> Result<Vec<Contact>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{API_BASE}/contacts"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(bearer_error(resp.status()));
        }
        resp.json::<Vec<Contact>>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(offline())
    }
}

/// Store a new contact via `POST /contacts`.
///
/// # Errors
///
/// `Validation`, `ExpiredToken`, or `Network`.
pub async fn add_contact(token: &str, payload: &ContactPayload) -> Result<Contact, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/contacts"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(payload)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(contact_error(resp.status()));
        }
        resp.json::<Contact>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(offline())
    }
}

/// Update an existing contact via `PATCH /contacts/{id}`.
///
/// # Errors
///
/// `Validation`, `ExpiredToken`, or `Network`.
pub async fn update_contact(
    token: &str,
    id: &str,
    payload: &ContactPayload,
) -> Result<Contact, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&format!("{API_BASE}/contacts/{id}"))
            .header("Authorization", &format!("Bearer {token}"))
            .json(payload)
            .map_err(|e| transport(&e))?
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(contact_error(resp.status()));
        }
        resp.json::<Contact>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err(offline())
    }
}

/// Remove a contact via `DELETE /contacts/{id}`. The service echoes the
/// removed contact back.
///
/// # Errors
///
/// `ExpiredToken` or `Network`.
pub async fn delete_contact(token: &str, id: &str) -> Result<Contact, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&format!("{API_BASE}/contacts/{id}"))
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| transport(&e))?;
        if !resp.ok() {
            return Err(bearer_error(resp.status()));
        }
        resp.json::<Contact>().await.map_err(|e| transport(&e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(offline())
    }
}
