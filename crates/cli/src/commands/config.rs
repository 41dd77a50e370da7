//! Site configuration management commands.
//!
//! # Usage
//!
//! ```bash
//! atelier config list --category seo
//! atelier config set site_title "Atelier Studio"
//! atelier config reset --category site
//! ```

use atelier_client::{BulkConfigUpdate, CmsClient, ConfigQuery, ConfigurationPatch};
use atelier_core::ConfigCategory;

use super::{CommandError, into_result, print_json, require_session};

/// List configurations, flat or grouped by category.
pub async fn list(
    client: &CmsClient,
    category: Option<ConfigCategory>,
    search: Option<String>,
    grouped: bool,
) -> Result<(), CommandError> {
    require_session(client)?;

    if grouped {
        let groups = into_result(client.configurations().list_by_category().await)?;
        for group in &groups {
            println!("{} ({})", group.label, group.category);
            for config in &group.configurations {
                println!("  {} = {}", config.key, config.effective_value());
            }
        }
        return Ok(());
    }

    let query = ConfigQuery { category, search };
    let configs = into_result(client.configurations().list(&query).await)?;
    for config in &configs {
        println!(
            "  {}  [{}/{}]  {}",
            config.key,
            config.category,
            config.value_type,
            config.effective_value()
        );
    }
    Ok(())
}

/// Show one configuration in full.
pub async fn get(client: &CmsClient, key: &str) -> Result<(), CommandError> {
    require_session(client)?;
    let config = into_result(client.configurations().get(key).await)?;
    print_json(&config)
}

/// Set one configuration's stored value.
pub async fn set(client: &CmsClient, key: &str, value: String) -> Result<(), CommandError> {
    require_session(client)?;
    let patch = ConfigurationPatch {
        value: Some(value),
        ..ConfigurationPatch::default()
    };
    let config = into_result(client.configurations().update(key, &patch).await)?;
    println!("{} = {}", config.key, config.effective_value());
    Ok(())
}

/// Delete a configuration (required entries are refused by the backend).
pub async fn delete(client: &CmsClient, key: &str) -> Result<(), CommandError> {
    require_session(client)?;
    into_result(client.configurations().delete(key).await)?;
    println!("Deleted {key}");
    Ok(())
}

/// Apply several `key=value` updates in one call.
pub async fn bulk_set(client: &CmsClient, pairs: &[String]) -> Result<(), CommandError> {
    require_session(client)?;

    let updates: Vec<BulkConfigUpdate> = pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| BulkConfigUpdate {
                    key: key.to_owned(),
                    value: value.to_owned(),
                })
                .ok_or_else(|| {
                    CommandError::Failed(format!("Expected key=value, got `{pair}`"))
                })
        })
        .collect::<Result<_, _>>()?;

    let report = into_result(client.configurations().bulk_update(&updates).await)?;
    println!("{}", report.message);
    for error in &report.errors {
        println!("  error: {error}");
    }
    Ok(())
}

/// Reset stored values to defaults, per category or globally.
pub async fn reset(
    client: &CmsClient,
    category: Option<ConfigCategory>,
) -> Result<(), CommandError> {
    require_session(client)?;
    into_result(client.configurations().reset_to_defaults(category).await)?;
    match category {
        Some(category) => println!("Reset {category} configurations to defaults"),
        None => println!("Reset all configurations to defaults"),
    }
    Ok(())
}

/// List the available categories and value types.
pub async fn choices(client: &CmsClient) -> Result<(), CommandError> {
    require_session(client)?;
    let categories = into_result(client.configurations().categories().await)?;
    let types = into_result(client.configurations().types().await)?;

    println!("Categories:");
    for item in &categories {
        println!("  {}  {}", item.value, item.label);
    }
    println!("Types:");
    for item in &types {
        println!("  {}  {}", item.value, item.label);
    }
    Ok(())
}
