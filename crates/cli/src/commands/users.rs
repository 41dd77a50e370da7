//! Admin user management commands.
//!
//! All of these require a staff session; non-staff callers get the
//! backend's permission failure.

use atelier_client::{CmsClient, UserCreate, UserPatch};
use atelier_core::{Email, UserId};

use super::{CommandError, into_result, require_session};

/// List users, optionally matching a search term.
pub async fn list(client: &CmsClient, search: Option<&str>) -> Result<(), CommandError> {
    require_session(client)?;
    let users = into_result(client.users().list(search).await)?;
    println!("{} user(s)", users.count);
    for user in &users.results {
        let mut flags = Vec::new();
        if user.is_staff {
            flags.push("staff");
        }
        if !user.is_active {
            flags.push("inactive");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", flags.join(", "))
        };
        println!("  {}  {}{flags}", user.id, user.email);
    }
    Ok(())
}

/// Create a user account.
pub async fn create(
    client: &CmsClient,
    email: Email,
    password: String,
    first_name: String,
    last_name: String,
    staff: bool,
) -> Result<(), CommandError> {
    require_session(client)?;
    let user = UserCreate {
        email,
        password,
        first_name,
        last_name,
        is_staff: staff.then_some(true),
    };
    let created = into_result(client.users().create(&user).await)?;
    println!("Created user {} ({})", created.id, created.email);
    Ok(())
}

/// Patch a user's fields.
pub async fn update(
    client: &CmsClient,
    id: UserId,
    email: Option<Email>,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<(), CommandError> {
    require_session(client)?;
    let patch = UserPatch {
        email,
        first_name,
        last_name,
        ..UserPatch::default()
    };
    let user = into_result(client.users().update(id, &patch).await)?;
    println!("Updated user {} ({})", user.id, user.email);
    Ok(())
}

/// Delete a user account.
pub async fn delete(client: &CmsClient, id: UserId) -> Result<(), CommandError> {
    require_session(client)?;
    into_result(client.users().delete(id).await)?;
    println!("Deleted user {id}");
    Ok(())
}

/// Flip a user's staff flag.
pub async fn toggle_staff(client: &CmsClient, id: UserId) -> Result<(), CommandError> {
    require_session(client)?;
    let user = into_result(client.users().toggle_staff(id).await)?;
    println!(
        "{} is {} staff",
        user.email,
        if user.is_staff { "now" } else { "no longer" }
    );
    Ok(())
}

/// Flip a user's active flag.
pub async fn toggle_active(client: &CmsClient, id: UserId) -> Result<(), CommandError> {
    require_session(client)?;
    let user = into_result(client.users().toggle_active(id).await)?;
    println!(
        "{} is now {}",
        user.email,
        if user.is_active { "active" } else { "inactive" }
    );
    Ok(())
}
