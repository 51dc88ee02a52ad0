//! Application configuration.

use std::path::PathBuf;

/// Storage key the selected background is persisted under.
pub const STORAGE_KEY: &str = "selectedColor";
/// Background shown until a saved color is loaded or one is picked.
pub const DEFAULT_BACKGROUND: &str = "white";
/// Preset swatches offered under the picker. The first one is the picker's
/// initial value.
pub const SWATCHES: [&str; 6] = ["white", "grey", "black", "red", "green", "blue"];

/// Default JSON store file, relative to the working directory.
const DEFAULT_STORE_FILE: &str = "backdrop-store.json";

/// Runtime configuration for the Backdrop application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the file-backed key-value store lives.
    pub store_path: PathBuf,
    /// Keep the selection in memory only (nothing survives a restart).
    pub in_memory: bool,
    /// Key the selected background is stored under.
    pub storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: std::env::var_os("BACKDROP_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE)),
            in_memory: std::env::var("BACKDROP_IN_MEMORY").is_ok(),
            storage_key: STORAGE_KEY.to_owned(),
        }
    }
}
