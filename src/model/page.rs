use super::types::{PagePriority, PageStatus};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One entry of the declared registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub path: String,
    pub title: String,
    pub category: String,
    pub status: PageStatus,

    #[serde(default)]
    pub priority: PagePriority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PageEntry {
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        status: PageStatus,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            category: category.into(),
            status,
            priority: PagePriority::default(),
            notes: None,
        }
    }

    pub fn with_priority(mut self, priority: PagePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status == PageStatus::Complete
    }
}

/// A page file discovered on disk and the route it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesystemRoute {
    pub path: String,
    /// Location relative to the project root.
    pub file: PathBuf,
}

impl FilesystemRoute {
    pub fn new(path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: file.into(),
        }
    }
}
