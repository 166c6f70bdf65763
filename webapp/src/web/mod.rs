use dioxus::prelude::*;
use tracing::error;

use common::config::{parse_config, RelayOverrides, SiteConfig};

pub mod dom;
pub mod storage;
pub mod style;

use storage::Preferences;

const SITE_CONFIG: &str = include_str!("../../../portfolio.toml");

// the embedded site config, with the relay ids optionally supplied by the build
// environment instead of the file
pub fn site_config() -> SiteConfig {
    let overrides = RelayOverrides {
        service_id: option_env!("PORTFOLIO_RELAY_SERVICE_ID"),
        template_id: option_env!("PORTFOLIO_RELAY_TEMPLATE_ID"),
        public_key: option_env!("PORTFOLIO_RELAY_PUBLIC_KEY"),
    };

    let config = parse_config(SITE_CONFIG).unwrap_or_else(|err| {
        error!("{err:#}, falling back to defaults");
        SiteConfig::default()
    });

    config.with_overrides(overrides)
}

// the preference store provided by App
pub fn use_preferences() -> Signal<Preferences> {
    use_context()
}

pub fn use_site_config() -> SiteConfig {
    use_context()
}
