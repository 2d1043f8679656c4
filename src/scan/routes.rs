use crate::model::FilesystemRoute;
use std::collections::HashSet;
use std::path::{Component, Path};

/// Maps a page file (relative to the pages directory) to the route it serves.
///
/// Route groups `(name)` and parallel-route slots `@name` add no segment,
/// private folders `_name` are never routable, dynamic segments are kept.
pub fn route_from_page_file(relative: &Path, page_files: &[String]) -> Option<String> {
    let file_name = relative.file_name()?.to_string_lossy();
    if !page_files.iter().any(|p| p.as_str() == file_name.as_ref()) {
        return None;
    }

    let mut segments = Vec::new();
    for component in relative.parent()?.components() {
        let Component::Normal(part) = component else {
            continue;
        };
        let part = part.to_string_lossy();
        if part.starts_with('_') {
            return None;
        }
        if (part.starts_with('(') && part.ends_with(')')) || part.starts_with('@') {
            continue;
        }
        segments.push(part.into_owned());
    }

    Some(format!("/{}", segments.join("/")))
}

/// Builds the route list from project-relative file paths in traversal order.
///
/// When two files resolve to the same route the first one wins.
pub fn routes_from_files<I>(files: I, pages_dir: &Path, page_files: &[String]) -> Vec<FilesystemRoute>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut seen = HashSet::new();
    let mut routes = Vec::new();
    for file in files {
        let file = file.as_ref();
        let Ok(relative) = file.strip_prefix(pages_dir) else {
            continue;
        };
        let Some(path) = route_from_page_file(relative, page_files) else {
            continue;
        };
        if seen.insert(path.clone()) {
            routes.push(FilesystemRoute::new(path, file));
        } else {
            tracing::debug!(route = %path, file = %file.display(), "Duplicate route file ignored");
        }
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn page_files() -> Vec<String> {
        vec!["page.tsx".to_string(), "page.mdx".to_string()]
    }

    fn route(p: &str) -> Option<String> {
        route_from_page_file(Path::new(p), &page_files())
    }

    #[test]
    fn test_root_page() {
        assert_eq!(route("page.tsx").as_deref(), Some("/"));
    }

    #[test]
    fn test_nested_page() {
        assert_eq!(
            route("divorce/process/page.tsx").as_deref(),
            Some("/divorce/process")
        );
        assert_eq!(route("faq/page.mdx").as_deref(), Some("/faq"));
    }

    #[test]
    fn test_non_page_files_are_ignored() {
        assert_eq!(route("divorce/layout.tsx"), None);
        assert_eq!(route("divorce/page.css"), None);
    }

    #[test]
    fn test_route_groups_and_slots_are_dropped() {
        assert_eq!(
            route("(marketing)/custody/page.tsx").as_deref(),
            Some("/custody")
        );
        assert_eq!(route("@modal/login/page.tsx").as_deref(), Some("/login"));
    }

    #[test]
    fn test_private_folders_are_skipped() {
        assert_eq!(route("_components/page.tsx"), None);
        assert_eq!(route("custody/_drafts/page.tsx"), None);
    }

    #[test]
    fn test_dynamic_segments_are_kept() {
        assert_eq!(
            route("resources/[slug]/page.tsx").as_deref(),
            Some("/resources/[slug]")
        );
    }

    #[test]
    fn test_routes_from_files_dedupes_and_filters() {
        let files = vec![
            PathBuf::from("app/(site)/faq/page.tsx"),
            PathBuf::from("app/faq/page.mdx"),
            PathBuf::from("app/layout.tsx"),
            PathBuf::from("app/page.tsx"),
            PathBuf::from("components/page.tsx"),
        ];
        let routes = routes_from_files(&files, Path::new("app"), &page_files());
        assert_eq!(
            routes,
            vec![
                FilesystemRoute::new("/faq", "app/(site)/faq/page.tsx"),
                FilesystemRoute::new("/", "app/page.tsx"),
            ]
        );
    }
}
