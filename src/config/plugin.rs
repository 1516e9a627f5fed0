use serde::Deserialize;
use std::path::Path;

use crate::layout::ProjectLayout;
use crate::{Error, Result};

/// Plugin identity used for manifest generation and archive naming.
///
/// Loaded from an optional `plugin.toml` at the template root; any key not
/// present there falls back to the template defaults. The struct is built
/// once per invocation and passed around explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    pub id: String,
    pub action_keyword: String,
    pub package_name: String,
    pub short_description: String,
    pub author: String,
    pub version: String,
    pub language: String,
    pub website: String,
    pub icon_path: String,
    pub execute_filename: String,
}

// Internal struct for TOML deserialization
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    id: Option<String>,
    action_keyword: Option<String>,
    package_name: Option<String>,
    short_description: Option<String>,
    author: Option<String>,
    version: Option<String>,
    language: Option<String>,
    website: Option<String>,
    icon_path: Option<String>,
    execute_filename: Option<String>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            id: "2e0cd6dd-8f78-4ee9-b1b9-d7a07a12bf67".to_string(),
            action_keyword: "*".to_string(),
            package_name: "flow launcher plugin python template".to_string(),
            short_description: "A template for Flow Launcher Python plugins".to_string(),
            author: "Flow Launcher Team".to_string(),
            version: "0.1.0".to_string(),
            language: "python".to_string(),
            website: "https://github.com/Flow-Launcher/Flow.Launcher.Plugin.PythonTemplate"
                .to_string(),
            icon_path: "assets/icon.png".to_string(),
            execute_filename: "main.py".to_string(),
        }
    }
}

impl PluginConfig {
    /// Parse a config from TOML content, defaulting any missing key.
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        let defaults = Self::default();

        Ok(Self {
            id: raw.id.unwrap_or(defaults.id),
            action_keyword: raw.action_keyword.unwrap_or(defaults.action_keyword),
            package_name: raw.package_name.unwrap_or(defaults.package_name),
            short_description: raw.short_description.unwrap_or(defaults.short_description),
            author: raw.author.unwrap_or(defaults.author),
            version: raw.version.unwrap_or(defaults.version),
            language: raw.language.unwrap_or(defaults.language),
            website: raw.website.unwrap_or(defaults.website),
            icon_path: raw.icon_path.unwrap_or(defaults.icon_path),
            execute_filename: raw.execute_filename.unwrap_or(defaults.execute_filename),
        })
    }

    /// Load a config from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Load the config for a project, falling back to the template defaults
    /// when no plugin.toml exists.
    pub fn load_or_default(layout: &ProjectLayout) -> Result<Self> {
        let path = layout.plugin_toml();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Package name with the first letter of every word upper-cased, as used
    /// for the manifest display name and the archive filename.
    pub fn display_name(&self) -> String {
        title_case(&self.package_name)
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("flow launcher plugin"), "Flow Launcher Plugin");
        assert_eq!(title_case("ALREADY UPPER"), "Already Upper");
        assert_eq!(title_case("with-dashes here"), "With-Dashes Here");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = PluginConfig::parse("").unwrap();
        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_parse_partial_overrides() {
        let content = r#"
package_name = "my weather plugin"
version = "2.3.0"
author = "Jo Doe"
"#;
        let config = PluginConfig::parse(content).unwrap();
        assert_eq!(config.package_name, "my weather plugin");
        assert_eq!(config.version, "2.3.0");
        assert_eq!(config.author, "Jo Doe");
        // untouched keys keep defaults
        assert_eq!(config.language, "python");
        assert_eq!(config.execute_filename, "main.py");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = PluginConfig::parse("package_name = [broken");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_display_name() {
        let config = PluginConfig::default();
        assert_eq!(config.display_name(), "Flow Launcher Plugin Python Template");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(dir.path());
        let config = PluginConfig::load_or_default(&layout).unwrap();
        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plugin.toml"), "version = \"9.9.9\"\n").unwrap();
        let layout = ProjectLayout::new(dir.path());
        let config = PluginConfig::load_or_default(&layout).unwrap();
        assert_eq!(config.version, "9.9.9");
    }
}
