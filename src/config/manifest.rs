//! Service manifest (`package.json`) metadata.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The fields of a service's `package.json` the gateway cares about.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ServiceManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

impl ServiceManifest {
    /// Read the manifest if it exists. A missing or unreadable manifest is
    /// not fatal; it only affects the banner and docs title.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => {
                tracing::debug!(path = ?path, "No service manifest");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Ignoring malformed service manifest");
                Self::default()
            }
        }
    }

    /// `"<project> | <name>"` when both are known.
    pub fn display_name(&self) -> Option<String> {
        match (&self.project, &self.name) {
            (Some(project), Some(name)) => Some(format!("{} | {}", project, name)),
            _ => None,
        }
    }
}
