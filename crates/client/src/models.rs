//! Wire types for backend entities.
//!
//! All entities are owned by the backend; these are deserialized snapshots
//! used for rendering and re-fetched after any mutation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{ConfigCategory, ConfigType, Email, PostId, Slug, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// The identity persisted in the session after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: Email,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl SessionUser {
    /// Full display name, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.to_string()
        } else {
            name.to_owned()
        }
    }
}

/// An admin-managed user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

/// Payload for creating a user (admin).
#[derive(Debug, Clone, Serialize)]
pub struct UserCreate {
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Partial patch for an existing user (admin). Unset fields are untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for self-registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: Email,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

/// The minimal user echo returned by registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub email: Email,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Partial patch for the logged-in user's own profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// User list response: count plus unpaginated results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub count: u64,
    pub results: Vec<User>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Posts
// ─────────────────────────────────────────────────────────────────────────────

/// Post author reference embedded in post responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: UserId,
    pub email: Email,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A full blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    pub content: String,
    pub author: PostAuthor,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The trimmed post shape returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub excerpt: String,
    pub author: PostAuthor,
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or fully replacing a post.
#[derive(Debug, Clone, Serialize)]
pub struct PostDraft {
    pub title: String,
    /// Client-suggested slug; the backend value is authoritative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    pub content: String,
    pub is_published: bool,
}

impl PostDraft {
    /// Build a draft with a slug suggested from the title.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let title = title.into();
        let slug = Slug::from_title(&title).ok();
        Self {
            title,
            slug,
            content: content.into(),
            is_published: false,
        }
    }
}

/// A page of results in the backend's pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configurations
// ─────────────────────────────────────────────────────────────────────────────

/// A dynamic site configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub category: ConfigCategory,
    #[serde(rename = "type", default)]
    pub value_type: ConfigType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub order: u32,
}

impl Configuration {
    /// The effective value, interpreted per the configuration's type, with
    /// the stored value falling back to the default.
    #[must_use]
    pub fn effective_value(&self) -> serde_json::Value {
        let raw = self
            .value
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.default_value.as_deref());
        raw.map_or(serde_json::Value::Null, |raw| {
            self.value_type.interpret(raw)
        })
    }
}

/// Payload for creating a configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationDraft {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub category: ConfigCategory,
    #[serde(rename = "type")]
    pub value_type: ConfigType,
    pub is_required: bool,
    pub is_public: bool,
    pub order: u32,
}

/// Partial patch for a configuration. Unset fields are untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigurationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ConfigCategory>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ConfigType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// One entry in a bulk value update.
#[derive(Debug, Clone, Serialize)]
pub struct BulkConfigUpdate {
    pub key: String,
    pub value: String,
}

/// Per-key report returned by a bulk update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateReport {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub updated: Vec<Configuration>,
    /// Per-key failures, in the backend's own shape.
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Configurations grouped under one category for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: ConfigCategory,
    pub label: String,
    pub configurations: Vec<Configuration>,
}

/// A `{value, label}` choice item, as returned by the categories and types
/// endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceItem {
    pub value: String,
    pub label: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Public surface
// ─────────────────────────────────────────────────────────────────────────────

/// Typed public configuration values, keyed by configuration key.
pub type PublicConfigMap = BTreeMap<String, serde_json::Value>;

/// Aggregated public site information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    #[serde(default)]
    pub site: PublicConfigMap,
    #[serde(default)]
    pub seo: PublicConfigMap,
    #[serde(default)]
    pub social: PublicConfigMap,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user: SessionUser = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "solo@atelier.studio"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "solo@atelier.studio");
    }

    #[test]
    fn test_display_name_joins_parts() {
        let user: SessionUser = serde_json::from_value(serde_json::json!({
            "id": 1,
            "email": "ana@atelier.studio",
            "first_name": "Ana",
            "last_name": "Reis",
            "is_staff": true
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Ana Reis");
    }

    #[test]
    fn test_post_draft_suggests_slug() {
        let draft = PostDraft::new("Título Incrível! 2024", "body");
        assert_eq!(
            draft.slug.as_ref().map(atelier_core::Slug::as_str),
            Some("titulo-incrivel-2024")
        );
        assert!(!draft.is_published);
    }

    #[test]
    fn test_user_patch_skips_unset_fields() {
        let patch = UserPatch {
            is_active: Some(false),
            ..UserPatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"is_active": false}));
    }

    #[test]
    fn test_configuration_effective_value_prefers_value() {
        let config: Configuration = serde_json::from_value(serde_json::json!({
            "key": "posts_per_page",
            "label": "Posts per page",
            "value": "12",
            "default_value": "10",
            "category": "site",
            "type": "number"
        }))
        .unwrap();
        assert_eq!(config.effective_value(), serde_json::json!(12.0));
    }

    #[test]
    fn test_configuration_effective_value_falls_back_to_default() {
        let config: Configuration = serde_json::from_value(serde_json::json!({
            "key": "maintenance",
            "label": "Maintenance mode",
            "value": "",
            "default_value": "false",
            "category": "site",
            "type": "boolean"
        }))
        .unwrap();
        assert_eq!(config.effective_value(), serde_json::json!(false));
    }

    #[test]
    fn test_paginated_deserializes_without_links() {
        let page: Paginated<PostSummary> = serde_json::from_value(serde_json::json!({
            "count": 0,
            "results": []
        }))
        .unwrap();
        assert_eq!(page.count, 0);
        assert!(page.next.is_none());
    }
}
