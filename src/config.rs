//! Site configuration module.
//!
//! Handles loading, validating, and merging `folio.toml`. The file holds both
//! the profile itself (the `[profile]` table) and the handful of settings that
//! shape the generated page. Stock defaults are the base layer; the user file
//! is merged on top, key by key.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [profile]
//! name = ""                 # Any subset of the profile fields
//! skills = ""               # Comma-separated
//!
//! [colors]
//! accent = "#00bcd4"        # Profile ring, link hover
//! heading = "#1e3a5f"       # Name heading, contact links
//! text = "#333333"
//! muted = "#555555"         # Title line under the name
//! tag_background = "#f0f0f0"
//! card_background = "#ffffff"
//! gradient_start = "#eef5ff"
//! gradient_end = "#ffffff"
//!
//! [placeholders]
//! profile_image = "https://via.placeholder.com/150"
//! project_image = "https://via.placeholder.com/600x400/00bcd4/ffffff?text=Project+Screenshot"
//!
//! [fonts]
//! import_url = "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700;900&display=swap"
//! family = "'Roboto', sans-serif"
//! ```
//!
//! Unknown keys are rejected to catch typos early, including unknown profile
//! field names.

use crate::fields::Form;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILENAME: &str = "folio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `folio.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Profile field values.
    pub profile: Form,
    /// Palette injected into the embedded stylesheet.
    pub colors: ColorConfig,
    /// Images shown when nothing better is available.
    pub placeholders: PlaceholderConfig,
    /// Webfont import and font stack.
    pub fonts: FontConfig,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let colors = [
            ("accent", &self.colors.accent),
            ("heading", &self.colors.heading),
            ("text", &self.colors.text),
            ("muted", &self.colors.muted),
            ("tag_background", &self.colors.tag_background),
            ("card_background", &self.colors.card_background),
            ("gradient_start", &self.colors.gradient_start),
            ("gradient_end", &self.colors.gradient_end),
        ];
        for (key, value) in colors {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must not be empty"
                )));
            }
        }
        if self.placeholders.profile_image.trim().is_empty() {
            return Err(ConfigError::Validation(
                "placeholders.profile_image must not be empty".into(),
            ));
        }
        if self.placeholders.project_image.trim().is_empty() {
            return Err(ConfigError::Validation(
                "placeholders.project_image must not be empty".into(),
            ));
        }
        if self.fonts.family.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fonts.family must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Page palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Profile image ring and link hover color.
    pub accent: String,
    /// Name heading and contact link color.
    pub heading: String,
    /// Body text color.
    pub text: String,
    /// Secondary text (the title line under the name).
    pub muted: String,
    /// Skill tag background.
    pub tag_background: String,
    /// Project card background.
    pub card_background: String,
    /// Top-left stop of the page background gradient.
    pub gradient_start: String,
    /// Bottom-right stop of the page background gradient.
    pub gradient_end: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            accent: "#00bcd4".to_string(),
            heading: "#1e3a5f".to_string(),
            text: "#333333".to_string(),
            muted: "#555555".to_string(),
            tag_background: "#f0f0f0".to_string(),
            card_background: "#ffffff".to_string(),
            gradient_start: "#eef5ff".to_string(),
            gradient_end: "#ffffff".to_string(),
        }
    }
}

/// Placeholder images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    /// Profile image used when nothing is uploaded and no URL is typed.
    pub profile_image: String,
    /// Screenshot shown on the project card.
    pub project_image: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            profile_image: "https://via.placeholder.com/150".to_string(),
            project_image:
                "https://via.placeholder.com/600x400/00bcd4/ffffff?text=Project+Screenshot"
                    .to_string(),
        }
    }
}

/// Font settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// Stylesheet `@import`ed at the top of the embedded CSS. Empty disables it.
    pub import_url: String,
    /// CSS `font-family` value for the page body.
    pub family: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            import_url:
                "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700;900&display=swap"
                    .to_string(),
            family: "'Roboto', sans-serif".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `folio.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `folio.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(dir = %dir.display(), "loaded config");
    Ok(config)
}

/// Returns a fully-commented stock `folio.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Profile
# ---------------------------------------------------------------------------
# Every field is optional. Empty fields render a placeholder text instead
# ("Your Name", "yourname@example.com", ...). Values can also be set on the
# command line with --set field=value.
[profile]
name = ""
title = ""
bio = ""
# Comma-separated. Empty entries are dropped, order is kept.
skills = ""
project_title = ""
project_desc = ""
project_link = ""
email = ""
linkedin = ""
github = ""
# Profile image URL. An image passed with --image always takes precedence.
image_url = ""

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
accent = "#00bcd4"          # Profile image ring, link hover
heading = "#1e3a5f"         # Name heading, contact links
text = "#333333"
muted = "#555555"           # Title line under the name
tag_background = "#f0f0f0"
card_background = "#ffffff"
gradient_start = "#eef5ff"
gradient_end = "#ffffff"

# ---------------------------------------------------------------------------
# Placeholder images
# ---------------------------------------------------------------------------
[placeholders]
profile_image = "https://via.placeholder.com/150"
project_image = "https://via.placeholder.com/600x400/00bcd4/ffffff?text=Project+Screenshot"

# ---------------------------------------------------------------------------
# Fonts
# ---------------------------------------------------------------------------
[fonts]
# Imported at the top of the embedded stylesheet. Set to "" for no webfont.
import_url = "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;700;900&display=swap"
family = "'Roboto', sans-serif"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-accent: {accent};
    --color-heading: {heading};
    --color-text: {text};
    --color-muted: {muted};
    --color-tag-bg: {tag_background};
    --color-card-bg: {card_background};
    --gradient-start: {gradient_start};
    --gradient-end: {gradient_end};
}}"#,
        accent = colors.accent,
        heading = colors.heading,
        text = colors.text,
        muted = colors.muted,
        tag_background = colors.tag_background,
        card_background = colors.card_background,
        gradient_start = colors.gradient_start,
        gradient_end = colors.gradient_end,
    )
}

/// Generate the font portion of the stylesheet: the `@import` (if any) and
/// the body font stack.
pub fn generate_font_css(fonts: &FontConfig) -> String {
    let mut css = String::new();
    if !fonts.import_url.is_empty() {
        css.push_str(&format!("@import url('{}');\n", fonts.import_url));
    }
    css.push_str(&format!(
        ":root {{\n    --font-family: {};\n}}",
        fonts.family
    ));
    css
}
