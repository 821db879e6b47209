//! Account registration.
//!
//! # Usage
//!
//! ```bash
//! MP_REGISTER_PASSWORD=... mp-cli register -e jane@example.com -n "Jane Doe"
//! ```
//!
//! # Environment Variables
//!
//! - `MP_REGISTER_PASSWORD` - Password for the new account (kept off the
//!   command line so it stays out of shell history)

use marketplace_client::{MarketplaceClient, RegisterRequest, RegisteredUser};
use secrecy::SecretString;

use super::CliError;

/// Environment variable holding the new account's password.
pub const PASSWORD_VAR: &str = "MP_REGISTER_PASSWORD";

/// Register a new storefront account.
pub async fn register(
    client: &MarketplaceClient,
    email: &str,
    name: Option<String>,
) -> Result<RegisteredUser, CliError> {
    let password = std::env::var(PASSWORD_VAR)
        .map(SecretString::from)
        .map_err(|_| CliError::MissingEnvVar(PASSWORD_VAR))?;

    tracing::info!("Registering account: {email}");

    let user = client
        .auth()
        .register(&RegisterRequest {
            email: email.to_owned(),
            password,
            name,
        })
        .await?;

    tracing::info!("Account created! ID: {}, Email: {}", user.id, user.email);
    Ok(user)
}
