//! Application configuration
//!
//! The defaults are embedded in the bundle. A page can override any of them
//! with a TOML document in `<meta name="app-config" content="...">`.

use serde::Deserialize;

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
log_level = "debug"

[api]
base_url = "http://localhost:8000/api/"
with_credentials = true
requested_with = "XMLHttpRequest"

[ui]
edit_payload_source = "selection"
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL every resource path is joined to, e.g. `http://localhost:8000/api/`
    pub base_url: String,
    /// Send cookies with cross-origin requests (`credentials: include`)
    pub with_credentials: bool,
    /// Value of the `X-Requested-With` header; empty disables the header
    pub requested_with: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub edit_payload_source: EditPayloadSource,
}

/// Where the edit flow takes the submitted name/amount/quantity/image from.
///
/// `Selection` sends the values of the product the edit modal was opened with,
/// ignoring what was typed into the form. `Form` sends the live form values.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditPayloadSource {
    #[default]
    Selection,
    Form,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            api: ApiConfig::default(),
            ui: UiConfig {
                edit_payload_source: EditPayloadSource::Selection,
            },
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".to_string(),
            with_credentials: true,
            requested_with: "XMLHttpRequest".to_string(),
        }
    }
}

impl AppConfig {
    /// Configured log level, `Debug` when the value is not recognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Load configuration: embedded defaults, then the optional override document on top.
pub fn load_config(override_toml: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut merged: toml::Table = DEFAULT_CONFIG.parse()?;
    if let Some(doc) = override_toml.filter(|d| !d.trim().is_empty()) {
        let overrides: toml::Table = doc.parse()?;
        merge_tables(&mut merged, overrides);
    }
    let config: AppConfig = toml::Value::Table(merged).try_into()?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Read the override document from `<meta name="app-config">`, if the page has one
pub fn read_page_override() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name=\"app-config\"]")
        .ok()
        .flatten()?;
    meta.get_attribute("content")
}
