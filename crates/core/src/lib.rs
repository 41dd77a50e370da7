//! Atelier Core - Shared types library.
//!
//! This crate provides common types used across all Atelier components:
//! - `client` - Typed client for the CMS REST backend
//! - `cli` - Command-line tools for content and site management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no session
//! state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, slugs, and
//!   configuration enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
