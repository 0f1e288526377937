//! Wire types for the Connections API.

/// A user as the API reports it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Registration payload for `POST /users/signup`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login payload for `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful signup/login response.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// A stored contact. Ids are issued by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Create/update payload for `POST /contacts` and `PATCH /contacts/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub number: String,
}
