//! Core types for Atelier.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod config;
pub mod email;
pub mod id;
pub mod slug;

pub use config::{ConfigCategory, ConfigType};
pub use email::{Email, EmailError};
pub use id::*;
pub use slug::{Slug, SlugError};
