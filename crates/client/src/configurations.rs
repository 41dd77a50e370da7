//! Site configuration management operations (admin).
//!
//! Configurations are addressed by key and grouped by category for
//! display. Required configurations refuse deletion; `reset_to_defaults`
//! restores stored values to their defaults, per category or globally.

use atelier_core::ConfigCategory;

use crate::models::{
    BulkConfigUpdate, BulkUpdateReport, CategoryGroup, ChoiceItem, Configuration,
    ConfigurationDraft, ConfigurationPatch,
};
use crate::outcome::Outcome;
use crate::transport::Transport;

const BASE: &str = "/api/configurations";

/// Filters for the configuration list endpoint.
#[derive(Debug, Clone, Default)]
pub struct ConfigQuery {
    /// Restrict to one category.
    pub category: Option<ConfigCategory>,
    /// Case-insensitive match against key, label, and description.
    pub search: Option<String>,
}

impl ConfigQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_owned()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

/// Client for site configuration management.
pub struct ConfigurationsClient<'a> {
    transport: &'a Transport,
}

impl<'a> ConfigurationsClient<'a> {
    pub(crate) const fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List configurations, optionally filtered, ordered by category and
    /// display order.
    pub async fn list(&self, query: &ConfigQuery) -> Outcome<Vec<Configuration>> {
        self.transport
            .run(
                self.transport.get(&format!("{BASE}/")).query(&query.params()),
                "Could not load configurations",
            )
            .await
    }

    /// List configurations grouped by category.
    pub async fn list_by_category(&self) -> Outcome<Vec<CategoryGroup>> {
        self.transport
            .run(
                self.transport
                    .get(&format!("{BASE}/"))
                    .query(&[("group_by_category", "true")]),
                "Could not load configurations by category",
            )
            .await
    }

    /// Fetch a single configuration by key.
    pub async fn get(&self, key: &str) -> Outcome<Configuration> {
        self.transport
            .run(
                self.transport.get(&format!("{BASE}/{key}/")),
                "Configuration not found",
            )
            .await
    }

    /// Create a configuration.
    pub async fn create(&self, draft: &ConfigurationDraft) -> Outcome<Configuration> {
        self.transport
            .run_field(
                self.transport.post_json(&format!("{BASE}/"), draft),
                "configuration",
                "Could not create configuration",
            )
            .await
    }

    /// Update a configuration (partial patch).
    pub async fn update(&self, key: &str, patch: &ConfigurationPatch) -> Outcome<Configuration> {
        self.transport
            .run_field(
                self.transport.patch_json(&format!("{BASE}/{key}/"), patch),
                "configuration",
                "Could not update configuration",
            )
            .await
    }

    /// Delete a configuration. Required configurations are refused by the
    /// backend.
    pub async fn delete(&self, key: &str) -> Outcome<()> {
        self.transport
            .run_message(
                self.transport.delete(&format!("{BASE}/{key}/")),
                "Could not delete configuration",
            )
            .await
    }

    /// Update several configuration values in one call, returning a
    /// per-key report of updates and failures.
    pub async fn bulk_update(&self, updates: &[BulkConfigUpdate]) -> Outcome<BulkUpdateReport> {
        let body = serde_json::json!({ "configurations": updates });
        self.transport
            .run(
                self.transport.post_json(&format!("{BASE}/bulk_update/"), &body),
                "Bulk update failed",
            )
            .await
    }

    /// Reset stored values to their defaults, for one category or - when
    /// `category` is `None` - globally.
    pub async fn reset_to_defaults(&self, category: Option<ConfigCategory>) -> Outcome<()> {
        let body = category.map_or_else(
            || serde_json::json!({}),
            |category| serde_json::json!({ "category": category }),
        );
        self.transport
            .run_message(
                self.transport
                    .post_json(&format!("{BASE}/reset_to_defaults/"), &body),
                "Could not reset configurations",
            )
            .await
    }

    /// Available categories as `{value, label}` pairs.
    pub async fn categories(&self) -> Outcome<Vec<ChoiceItem>> {
        self.transport
            .run(
                self.transport.get(&format!("{BASE}/categories/")),
                "Could not load categories",
            )
            .await
    }

    /// Available value types as `{value, label}` pairs.
    pub async fn types(&self) -> Outcome<Vec<ChoiceItem>> {
        self.transport
            .run(
                self.transport.get(&format!("{BASE}/types/")),
                "Could not load types",
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params() {
        let query = ConfigQuery {
            category: Some(ConfigCategory::Seo),
            search: Some("title".to_owned()),
        };
        assert_eq!(
            query.params(),
            vec![
                ("category", "seo".to_owned()),
                ("search", "title".to_owned()),
            ]
        );
    }

    #[test]
    fn test_query_params_empty() {
        assert!(ConfigQuery::default().params().is_empty());
    }
}
