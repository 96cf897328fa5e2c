//! libris - Terminal-based library catalog manager
//!
//! This library provides the core functionality for the libris catalog
//! manager: a single-operator tool that tracks books, members, and loans in
//! flat CSV files and drives them from a menu session or one-shot commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (books, members, loans)
//! - `storage`: Headerless CSV file storage layer
//! - `crypto`: Member password hashing
//! - `services`: Business logic layer (catalog, membership, circulation)
//! - `cli`: One-shot command handlers
//! - `display`: Terminal table formatting
//! - `shell`: The interactive librarian menu
//!
//! # Example
//!
//! ```rust,ignore
//! use libris::config::{paths::LibrisPaths, settings::Settings};
//! use libris::storage::Storage;
//!
//! let paths = LibrisPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! ```
//!
//! # Known limitations
//!
//! Nothing coordinates concurrent processes: each operation rewrites whole
//! files and the last writer wins. The tool is built for a single operator
//! at a single desk.

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::LibrisError;
