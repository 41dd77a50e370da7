//! Authentication commands.
//!
//! # Usage
//!
//! ```bash
//! atelier auth login -e ana@atelier.studio -p <password>
//! atelier auth whoami
//! atelier auth logout
//! ```

use atelier_client::{CmsClient, ProfileUpdate, RegisterRequest};
use atelier_core::Email;

use super::{CommandError, into_result, print_json, require_session};

/// Log in and persist the session.
pub async fn login(client: &CmsClient, email: &Email, password: &str) -> Result<(), CommandError> {
    let user = into_result(client.auth().login(email, password).await)?;
    println!("Logged in as {}", user.display_name());
    Ok(())
}

/// Register a new account. Does not log in.
pub async fn register(
    client: &CmsClient,
    email: Email,
    password: String,
    first_name: String,
    last_name: String,
) -> Result<(), CommandError> {
    let request = RegisterRequest {
        email,
        password_confirm: password.clone(),
        password,
        first_name,
        last_name,
    };
    let user = into_result(client.auth().register(&request).await)?;
    println!("Registered {}. Log in with `atelier auth login`.", user.email);
    Ok(())
}

/// Clear the persisted session.
pub fn logout(client: &CmsClient) {
    client.auth().logout();
    println!("Logged out");
}

/// Show the persisted session user, without a network round trip.
pub fn whoami(client: &CmsClient) -> Result<(), CommandError> {
    match client.auth().current_user() {
        Some(user) => {
            println!(
                "{} <{}>{}",
                user.display_name(),
                user.email,
                if user.is_staff { " [staff]" } else { "" }
            );
            Ok(())
        }
        None => Err(CommandError::LoginRequired),
    }
}

/// Fetch the profile from the backend.
pub async fn profile(client: &CmsClient) -> Result<(), CommandError> {
    require_session(client)?;
    let user = into_result(client.auth().profile().await)?;
    print_json(&user)
}

/// Update the logged-in user's name fields.
pub async fn update_profile(
    client: &CmsClient,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<(), CommandError> {
    require_session(client)?;
    let update = ProfileUpdate {
        first_name,
        last_name,
    };
    let user = into_result(client.auth().update_profile(&update).await)?;
    println!("Profile updated: {}", user.display_name());
    Ok(())
}
