//! The declared page registry.
//!
//! The registry is a data file maintained next to the site, with a top-level
//! `pages` list:
//!
//! ```yaml
//! pages:
//!   - path: /divorce
//!     title: Divorce in Arizona
//!     category: Divorce
//!     status: complete
//!     priority: high
//!   - path: /mediation
//!     title: Mediation
//!     category: Mediation
//!     status: planned
//!     notes: Waiting on review
//! ```
//!
//! YAML, TOML (`[[pages]]`) and JSON are accepted, picked by file extension.

use crate::error::{AuditError, Result};
use crate::model::PageEntry;
use crate::validation;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryFormat {
    Yaml,
    Toml,
    Json,
}

impl RegistryFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yml" | "yaml" => Ok(RegistryFormat::Yaml),
            "toml" => Ok(RegistryFormat::Toml),
            "json" => Ok(RegistryFormat::Json),
            _ => Err(AuditError::Config(format!(
                "Unsupported registry format: {}",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

impl Registry {
    pub fn new(pages: Vec<PageEntry>) -> Result<Self> {
        validation::validate_entries(&pages)?;
        Ok(Self { pages })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = RegistryFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            AuditError::Config(format!(
                "Failed to read registry {}: {}",
                path.display(),
                e
            ))
        })?;
        let registry = Self::parse(&content, format)?;
        tracing::info!(
            path = %path.display(),
            pages = registry.pages.len(),
            "Loaded page registry"
        );
        Ok(registry)
    }

    pub fn parse(content: &str, format: RegistryFormat) -> Result<Self> {
        let registry: Registry = match format {
            RegistryFormat::Yaml => serde_yaml::from_str(content)?,
            RegistryFormat::Toml => toml::from_str(content)?,
            RegistryFormat::Json => serde_json::from_str(content)?,
        };
        validation::validate_entries(&registry.pages)?;
        Ok(registry)
    }

    pub fn render(&self, format: RegistryFormat) -> Result<String> {
        let content = match format {
            RegistryFormat::Yaml => serde_yaml::to_string(self)?,
            RegistryFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| AuditError::Parse(e.to_string()))?
            }
            RegistryFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(content)
    }

    /// Every declared page, in declaration order.
    pub fn all_pages(&self) -> &[PageEntry] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
