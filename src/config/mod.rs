//! Configuration and path management for libris

pub mod paths;
pub mod settings;

pub use paths::LibrisPaths;
pub use settings::Settings;
