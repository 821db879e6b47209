//! Account registration.
//!
//! Registration surfaces server errors verbatim and collapses connect and
//! timeout failures into one "cannot connect" error.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use tracing::instrument;

use crate::client::MarketplaceClient;
use crate::error::ApiError;
use crate::http::ApiRequest;

/// Message used when the server never answered.
pub const UNREACHABLE_MESSAGE: &str = "Cannot connect to server. Please try again later.";

/// Registration payload.
pub struct RegisterRequest {
    pub email: String,
    pub password: SecretString,
    pub name: Option<String>,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl Serialize for RegisterRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.name.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("RegisterRequest", len)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("password", self.password.expose_secret())?;
        if let Some(name) = &self.name {
            state.serialize_field("name", name)?;
        }
        state.end()
    }
}

/// The account created by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Accessor for `/auth`.
#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    client: &'a MarketplaceClient,
}

impl<'a> Auth<'a> {
    pub(crate) const fn new(client: &'a MarketplaceClient) -> Self {
        Self { client }
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the server's error unchanged when it answered, or
    /// `ApiError::Unreachable` when no response arrived.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisteredUser, ApiError> {
        let request = ApiRequest::post("/auth/register").json(request)?;
        self.client
            .mutate(request, &[])
            .await
            .map_err(|err| match err {
                ApiError::Http(e) if e.is_connect() || e.is_timeout() => {
                    ApiError::Unreachable(UNREACHABLE_MESSAGE.to_string())
                }
                other => other,
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_exposes_password_only_in_body() {
        let request = RegisterRequest {
            email: "jane@example.com".to_string(),
            password: SecretString::from("hunter22"),
            name: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"email": "jane@example.com", "password": "hunter22"})
        );
        assert!(!format!("{request:?}").contains("hunter22"));
    }
}
