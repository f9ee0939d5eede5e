//! Core domain logic for Bloom
//!
//! This crate holds the plant catalog content and the login form model.
//! There is no backend: the catalog is static data loaded once at
//! startup, and login validation is purely local.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod login;

pub use catalog::{browse_themes, garden_items, CardItem, ImageItem};
pub use login::{LoginError, LoginForm};
