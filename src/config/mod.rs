//! Configuration module for housesplit
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HousesplitPaths;
pub use settings::Settings;
