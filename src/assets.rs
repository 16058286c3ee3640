//! Static Assets
//!
//! Global page styling and the icon font set, loaded once at startup.
//! They are opaque to routing and state.

use crate::app::Host;
use crate::config::AssetsConfig;

/// Global stylesheet shipped with the app
pub const GLOBAL_STYLESHEET: &str = "assets/styles/global.css";

/// Font Awesome icon font stylesheet
pub const ICON_FONT_STYLESHEET: &str = "vendor/fontawesome-free/css/all.css";

/// Ordered list of stylesheets to load before mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    stylesheets: Vec<String>,
}

impl AssetManifest {
    pub fn new(stylesheets: Vec<String>) -> Self {
        Self { stylesheets }
    }

    pub fn from_config(config: &AssetsConfig) -> Self {
        Self::new(config.stylesheets.clone())
    }

    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    /// Load every stylesheet into the host, in manifest order
    pub fn load_into<H: Host>(&self, host: &mut H) {
        for href in &self.stylesheets {
            tracing::debug!(href = %href, "Loading stylesheet");
            host.load_stylesheet(href);
        }
    }
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self::new(vec![
            GLOBAL_STYLESHEET.to_string(),
            ICON_FONT_STYLESHEET.to_string(),
        ])
    }
}
