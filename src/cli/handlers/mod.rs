mod init;
mod pages;
mod report;
mod routes;
mod stats;
mod todos;
mod utils;

pub use init::handle_init;
pub use pages::{PagesParams, handle_attention, handle_pages};
pub use report::handle_report;
pub use routes::{handle_missing, handle_undocumented};
pub use stats::{handle_categories, handle_stats};
pub use todos::handle_todos;

use crate::config::AuditConfig;
use crate::registry::Registry;
use crate::scan::DiskTree;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: AuditConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: AuditConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Reads the registry fresh from disk.
    pub fn registry(&self) -> Result<Registry> {
        let path = self.config.registry_path(&self.root);
        Registry::load(&path)
            .with_context(|| format!("Failed to load registry {}", path.display()))
    }

    pub fn tree(&self) -> DiskTree {
        DiskTree::new(&self.root, self.config.layout())
    }
}
