//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quicknotes_core` linkage.
//! - Show which backend base URL the current environment resolves to.

use quicknotes_core::ApiConfig;

fn main() {
    let config = ApiConfig::from_env();
    println!("quicknotes_core version={}", quicknotes_core::core_version());
    println!("quicknotes_core api_base_url={}", config.base_url);
}
