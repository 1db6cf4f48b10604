//! Common constants used throughout the stencil application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["stencil.json", "stencil.yml", "stencil.yaml"];

/// File name the instantiated license is written under
pub const LICENSE_FILE_NAME: &str = "COPYING";
