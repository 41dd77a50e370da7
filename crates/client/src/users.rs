//! Admin user management operations.
//!
//! Every operation here requires a staff session. The backend blocks
//! self-demotion and self-deletion; the client just surfaces the resulting
//! failure envelope.

use atelier_core::UserId;

use crate::models::{User, UserCreate, UserList, UserPatch};
use crate::outcome::Outcome;
use crate::transport::Transport;

/// Client for admin user management.
pub struct UsersClient<'a> {
    transport: &'a Transport,
}

impl<'a> UsersClient<'a> {
    pub(crate) const fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List users, optionally matching a search term against email and
    /// name fields.
    pub async fn list(&self, search: Option<&str>) -> Outcome<UserList> {
        let mut builder = self.transport.get("/auth/users/");
        if let Some(search) = search {
            builder = builder.query(&[("search", search)]);
        }
        self.transport.run(builder, "Could not load users").await
    }

    /// Create a user.
    pub async fn create(&self, user: &UserCreate) -> Outcome<User> {
        self.transport
            .run_field(
                self.transport.post_json("/auth/users/", user),
                "user",
                "Could not create user",
            )
            .await
    }

    /// Update a user (partial patch).
    pub async fn update(&self, id: UserId, patch: &UserPatch) -> Outcome<User> {
        self.transport
            .run_field(
                self.transport.patch_json(&format!("/auth/users/{id}/"), patch),
                "user",
                "Could not update user",
            )
            .await
    }

    /// Delete a user. Deleting your own account is refused by the backend.
    pub async fn delete(&self, id: UserId) -> Outcome<()> {
        self.transport
            .run_message(
                self.transport.delete(&format!("/auth/users/{id}/")),
                "Could not delete user",
            )
            .await
    }

    /// Toggle a user's staff flag. Removing your own staff status is
    /// refused by the backend.
    pub async fn toggle_staff(&self, id: UserId) -> Outcome<User> {
        self.transport
            .run_field(
                self.transport
                    .post(&format!("/auth/users/{id}/toggle_staff/")),
                "user",
                "Could not change staff status",
            )
            .await
    }

    /// Toggle a user's active flag. Deactivating your own account is
    /// refused by the backend.
    pub async fn toggle_active(&self, id: UserId) -> Outcome<User> {
        self.transport
            .run_field(
                self.transport
                    .post(&format!("/auth/users/{id}/toggle_active/")),
                "user",
                "Could not change active status",
            )
            .await
    }
}
