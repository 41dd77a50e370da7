//! Command implementations, one module per backend surface.

pub mod auth;
pub mod config;
pub mod posts;
pub mod site;
pub mod users;

use atelier_client::{
    ClientConfig, CmsClient, ConfigError, GuardDecision, Outcome, SessionUser,
};
use thiserror::Error;

/// Errors surfaced to the top-level runner.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Client configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error("Client error: {0}")]
    Client(#[from] atelier_client::ClientError),

    /// No session; the command requires login.
    #[error("Not logged in. Run `atelier auth login` first.")]
    LoginRequired,

    /// The backend reported a failure.
    #[error("{0}")]
    Failed(String),
}

/// Build a client from environment configuration.
pub fn client() -> Result<CmsClient, CommandError> {
    let config = ClientConfig::from_env()?;
    Ok(CmsClient::new(&config)?)
}

/// Resolve the route guard, rejecting commands that need a session.
pub fn require_session(client: &CmsClient) -> Result<SessionUser, CommandError> {
    match client.guard().resolve() {
        GuardDecision::Allow(user) => Ok(user),
        GuardDecision::RedirectToLogin => Err(CommandError::LoginRequired),
    }
}

/// Unwrap an outcome, folding field errors into the failure message.
pub fn into_result<T>(outcome: Outcome<T>) -> Result<T, CommandError> {
    match outcome {
        Outcome::Success { data, .. } => Ok(data),
        Outcome::Failure { message, errors } => {
            let mut rendered = message;
            for (field, issues) in &errors {
                rendered.push_str(&format!("\n  {field}: {}", issues.join("; ")));
            }
            Err(CommandError::Failed(rendered))
        }
    }
}

/// Pretty-print a serializable payload as JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CommandError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CommandError::Failed(format!("Could not render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
