//! URL slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty or slugifies to nothing.
    #[error("slug cannot be empty")]
    Empty,
    /// The input contains characters outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacter,
    /// The input has a leading, trailing, or doubled hyphen.
    #[error("slug hyphens must separate non-empty segments")]
    MalformedHyphens,
}

/// A URL-safe post identifier.
///
/// Slugs are lowercase, accent-stripped, hyphen-joined tokens derived from
/// post titles. The client suggests one via [`Slug::from_title`]; the value
/// the backend stores is authoritative and may differ (it appends counters
/// to keep slugs unique).
///
/// ## Examples
///
/// ```
/// use atelier_core::Slug;
///
/// let slug = Slug::from_title("Título Incrível! 2024").unwrap();
/// assert_eq!(slug.as_str(), "titulo-incrivel-2024");
///
/// assert!(Slug::parse("valid-slug-42").is_ok());
/// assert!(Slug::parse("Not A Slug").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a post title.
    ///
    /// Normalizes accents to ASCII, lowercases, and joins words with single
    /// hyphens. Punctuation is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError::Empty`] if the title contains no sluggable
    /// characters (for example, a title of only punctuation).
    pub fn from_title(title: &str) -> Result<Self, SlugError> {
        let slugified = slug::slugify(title);
        if slugified.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self(slugified))
    }

    /// Parse an already-formed slug, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters outside
    /// `[a-z0-9-]`, or has leading/trailing/doubled hyphens.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacter);
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MalformedHyphens);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
