//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_ITEMS_PER_PAGE;

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_alert_window_days() -> u32 {
    7
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_farm_name() -> String {
    "Farm Dashboard".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// Settings shared by the list and dashboard services.
pub struct DashboardConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// How far ahead due vaccinations and calvings raise alerts.
    #[serde(default = "default_alert_window_days")]
    pub alert_window_days: u32,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_farm_name")]
    pub farm_name: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            alert_window_days: default_alert_window_days(),
            currency_symbol: default_currency_symbol(),
            farm_name: default_farm_name(),
        }
    }
}

#[cfg(feature = "app")]
impl DashboardConfig {
    /// Loads `{dir}/default`, the optional `{dir}/{app_env}` profile and
    /// `APP_*` environment overrides, in that order.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(all(test, feature = "app"))]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn profile_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "items_per_page: 5\nfarm_name: Green Acres\n",
        )
        .unwrap();
        fs::write(dir.path().join("test.yaml"), "alert_window_days: 14\n").unwrap();

        let config = DashboardConfig::load(dir.path().to_str().unwrap(), "test").unwrap();

        assert_eq!(config.items_per_page, 5);
        assert_eq!(config.alert_window_days, 14);
        assert_eq!(config.farm_name, "Green Acres");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn missing_default_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DashboardConfig::load(dir.path().to_str().unwrap(), "local").is_err());
    }
}
