//! Data models for the site audit.
//!
//! - [`PageEntry`]: one declared page of the registry
//! - [`PageStatus`]: completion states (complete, partial, placeholder, planned)
//! - [`PagePriority`]: priority levels (high, medium, low)
//! - [`FilesystemRoute`]: a page file found on disk
//! - [`TodoFinding`]: a comment marker found in source text

mod page;
mod todo;
mod types;

pub use page::{FilesystemRoute, PageEntry};
pub use todo::{ScanWarning, TodoFinding, TodoScan};
pub use types::{PagePriority, PageStatus, TodoKind};
