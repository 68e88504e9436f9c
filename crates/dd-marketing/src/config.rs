//! Server configuration

/// Settings not covered by `[package.metadata.leptos]`
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: std::env::var("DD_ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
            log_filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dd_marketing=debug,dd_core=info,tower_http=debug".to_string()),
        }
    }
}
