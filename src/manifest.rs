use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::PluginConfig;
use crate::{Error, Result};

/// The plugin.json record the launcher reads to register the plugin.
///
/// Field order matches the key order the launcher's documentation shows;
/// serde_json preserves it when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ActionKeyword")]
    pub action_keyword: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
    #[serde(rename = "ExecuteFileName")]
    pub execute_filename: String,
}

impl PluginManifest {
    /// Build the manifest record from the plugin config.
    pub fn from_config(config: &PluginConfig) -> Self {
        Self {
            id: config.id.clone(),
            action_keyword: config.action_keyword.clone(),
            name: config.display_name(),
            description: config.short_description.clone(),
            author: config.author.clone(),
            version: config.version.clone(),
            language: config.language.clone(),
            website: config.website.clone(),
            ico_path: config.icon_path.clone(),
            execute_filename: config.execute_filename.clone(),
        }
    }

    /// Overwrite the manifest file with pretty-printed JSON.
    ///
    /// The file is rewritten in full; prior contents are never merged.
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
