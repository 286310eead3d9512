//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence
//! - Command-line overrides

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{Settings, SettingsOverrides};
