//! Site configuration enums.
//!
//! Categories group configurations for display; types drive how a stored
//! string value is interpreted.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Category a site configuration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfigCategory {
    Site,
    Email,
    Seo,
    Social,
    #[default]
    Other,
}

impl ConfigCategory {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [Self::Site, Self::Email, Self::Seo, Self::Social, Self::Other];

    /// Wire identifier for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Site => "site",
            Self::Email => "email",
            Self::Seo => "seo",
            Self::Social => "social",
            Self::Other => "other",
        }
    }

    /// Human-readable label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Site => "Site",
            Self::Email => "Email",
            Self::Seo => "SEO",
            Self::Social => "Social Media",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ConfigCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "site" => Ok(Self::Site),
            "email" => Ok(Self::Email),
            "seo" => Ok(Self::Seo),
            "social" => Ok(Self::Social),
            "other" => Ok(Self::Other),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Value type of a site configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    #[default]
    Text,
    Textarea,
    Number,
    Boolean,
    Email,
    Url,
    Json,
}

impl ConfigType {
    /// All types, in display order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Textarea,
        Self::Number,
        Self::Boolean,
        Self::Email,
        Self::Url,
        Self::Json,
    ];

    /// Wire identifier for the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Email => "email",
            Self::Url => "url",
            Self::Json => "json",
        }
    }

    /// Human-readable label for the type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Text Area",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Email => "Email",
            Self::Url => "URL",
            Self::Json => "JSON",
        }
    }

    /// Interpret a raw stored value according to this type.
    ///
    /// Mirrors the backend's coercion rules: numbers parse as floats,
    /// booleans accept truthy strings, JSON parses as a document, and
    /// everything else stays a string. Unparseable values yield `Null`.
    #[must_use]
    pub fn interpret(self, raw: &str) -> serde_json::Value {
        match self {
            Self::Number => raw
                .parse::<f64>()
                .ok()
                .and_then(|n| serde_json::Number::from_f64(n).map(serde_json::Value::Number))
                .unwrap_or(serde_json::Value::Null),
            Self::Boolean => {
                let truthy = matches!(raw.to_ascii_lowercase().as_str(), "true" | "1" | "yes");
                serde_json::Value::Bool(truthy)
            }
            Self::Json => serde_json::from_str(raw).unwrap_or(serde_json::Value::Null),
            Self::Text | Self::Textarea | Self::Email | Self::Url => {
                serde_json::Value::String(raw.to_owned())
            }
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "textarea" => Ok(Self::Textarea),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "email" => Ok(Self::Email),
            "url" => Ok(Self::Url),
            "json" => Ok(Self::Json),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Error for parsing an unrecognized enum identifier.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);
