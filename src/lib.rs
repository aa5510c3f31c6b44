//! Oxisplash - a lightweight Unsplash photo browser for the terminal.
//!
//! This crate fetches photos from the Unsplash API, lists and searches them
//! in pages, keeps favorites in a local SQLite table with live queries, and
//! downloads full-resolution files into the Pictures directory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the repository and screen state holders.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer rendering view states as terminal output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "oxisplash";
