//! Read-only access to the project tree.
//!
//! - [`SiteTree`]: the seam between the audit and the filesystem
//! - [`DiskTree`]: walks the real project with the `ignore` walker
//! - [`MemoryTree`]: an in-memory tree for tests and embedding
//! - [`scan_todos`]: bounded TODO/FIXME/HACK marker scan
//!
//! Traversal is depth first with entries sorted by file name inside each
//! directory, so results and truncation points are reproducible.

mod routes;
mod todos;
mod tree;

pub use routes::{route_from_page_file, routes_from_files};
pub use todos::{DEFAULT_MAX_RESULTS, MAX_SNIPPET_CHARS, find_marker, scan_todos};
pub use tree::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_PAGE_FILES, DEFAULT_TEXT_EXTENSIONS, DiskTree, MemoryTree,
    SiteTree, TextFiles, TreeLayout,
};
