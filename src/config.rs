use crate::audit::PathMatch;
use crate::error::{AuditError, Result};
use crate::scan::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_MAX_RESULTS, DEFAULT_PAGE_FILES, DEFAULT_TEXT_EXTENSIONS,
    TreeLayout,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".siteaudit.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub project: ProjectSettings,

    #[serde(default)]
    pub routes: RouteSettings,

    #[serde(default)]
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Registry data file, relative to the project root.
    #[serde(default = "default_registry")]
    pub registry: String,

    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Root of the marker scan.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
}

fn default_registry() -> String {
    "sitemap.yml".to_string()
}

fn default_pages_dir() -> String {
    "app".to_string()
}

fn default_source_dir() -> String {
    ".".to_string()
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            pages_dir: default_pages_dir(),
            source_dir: default_source_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSettings {
    #[serde(default = "default_page_files")]
    pub page_files: Vec<String>,

    #[serde(default)]
    pub path_match: PathMatch,
}

fn default_page_files() -> Vec<String> {
    DEFAULT_PAGE_FILES.iter().map(|s| s.to_string()).collect()
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            page_files: default_page_files(),
            path_match: PathMatch::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_extensions() -> Vec<String> {
    DEFAULT_TEXT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            extensions: default_extensions(),
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

impl AuditConfig {
    /// Loads the config found at or above `start_path`, returning it with the
    /// project root (the directory holding the config file).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            AuditError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        let config: AuditConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| AuditError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        tracing::debug!(config = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(AuditError::NotInitialized);
            }
        }
    }

    pub fn registry_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.project.registry)
    }

    pub fn layout(&self) -> TreeLayout {
        TreeLayout {
            page_files: self.routes.page_files.clone(),
            extensions: self.scan.extensions.clone(),
            exclude_dirs: self.scan.exclude_dirs.clone(),
            ..TreeLayout::default()
        }
        .with_pages_dir(&self.project.pages_dir)
        .with_source_dir(&self.project.source_dir)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AuditError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
