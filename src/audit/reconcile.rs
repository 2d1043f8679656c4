use crate::model::{FilesystemRoute, PageEntry};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// How registry paths are compared with discovered routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// Byte-exact string equality.
    #[default]
    Exact,
    /// Trailing slash trimmed (except the root) and ASCII case folded.
    Normalized,
}

impl PathMatch {
    pub fn key<'a>(&self, path: &'a str) -> Cow<'a, str> {
        match self {
            PathMatch::Exact => Cow::Borrowed(path),
            PathMatch::Normalized => {
                let trimmed = path.trim_end_matches('/');
                let trimmed = if trimmed.is_empty() && path.starts_with('/') {
                    "/"
                } else {
                    trimmed
                };
                Cow::Owned(trimmed.to_ascii_lowercase())
            }
        }
    }
}

/// Routes found on disk that the registry does not declare, in discovery order.
pub fn undocumented_routes(
    registry: &[PageEntry],
    fs_routes: &[FilesystemRoute],
    mode: PathMatch,
) -> Vec<FilesystemRoute> {
    let declared: HashSet<Cow<'_, str>> = registry.iter().map(|p| mode.key(&p.path)).collect();
    fs_routes
        .iter()
        .filter(|r| !declared.contains(mode.key(&r.path).as_ref()))
        .cloned()
        .collect()
}

/// Registry entries with no page file on disk, in registry order.
pub fn missing_declared_pages(
    registry: &[PageEntry],
    fs_routes: &[FilesystemRoute],
    mode: PathMatch,
) -> Vec<PageEntry> {
    let discovered: HashSet<Cow<'_, str>> = fs_routes.iter().map(|r| mode.key(&r.path)).collect();
    registry
        .iter()
        .filter(|p| !discovered.contains(mode.key(&p.path).as_ref()))
        .cloned()
        .collect()
}
