use super::routes::routes_from_files;
use crate::error::ScanError;
use crate::model::{FilesystemRoute, ScanWarning};
use ignore::WalkBuilder;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_PAGE_FILES: &[&str] = &[
    "page.tsx", "page.ts", "page.jsx", "page.js", "page.mdx", "page.md",
];

pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "mjs", "cjs", "mdx", "md", "css", "scss", "html", "json", "rs",
    "toml", "yaml", "yml",
];

pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    "dist",
    "build",
    "out",
    "target",
    "coverage",
    ".turbo",
    ".vercel",
];

/// Read-only view of the project tree the audit runs against.
///
/// All paths going in and out are relative to the project root.
pub trait SiteTree {
    /// Page routes under the pages directory, in traversal order.
    fn list_routes(&self) -> Result<Vec<FilesystemRoute>, ScanError>;

    /// Text files under the source directory eligible for the marker scan,
    /// plus the entries that could not be listed.
    fn list_text_files(&self) -> Result<TextFiles, ScanError>;

    fn read_text(&self, file: &Path) -> io::Result<String>;
}

/// Marker scan candidates in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFiles {
    pub files: Vec<PathBuf>,
    /// Directories or entries the walk could not read. Files below them were
    /// never listed.
    pub skipped: Vec<ScanWarning>,
}

/// Where pages and sources live and which files count.
#[derive(Debug, Clone)]
pub struct TreeLayout {
    pub pages_dir: PathBuf,
    pub source_dir: PathBuf,
    pub page_files: Vec<String>,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            pages_dir: PathBuf::from("app"),
            source_dir: PathBuf::new(),
            page_files: DEFAULT_PAGE_FILES.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_TEXT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TreeLayout {
    pub fn with_pages_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.pages_dir = clean_relative(dir.as_ref());
        self
    }

    pub fn with_source_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.source_dir = clean_relative(dir.as_ref());
        self
    }

    pub fn is_text_file(&self, file: &Path) -> bool {
        file.extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
    }

    fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }

    /// Whether any directory component of `file` below the source directory
    /// is excluded from the marker scan.
    pub fn in_excluded_dir(&self, file: &Path) -> bool {
        file.parent().is_some_and(|dir| self.is_excluded_path(dir))
    }

    /// Whether `dir`, or any directory above it inside the source directory,
    /// is excluded.
    fn is_excluded_path(&self, dir: &Path) -> bool {
        dir.strip_prefix(&self.source_dir)
            .unwrap_or(dir)
            .components()
            .any(|c| match c {
                Component::Normal(name) => self.is_excluded_dir(&name.to_string_lossy()),
                _ => false,
            })
    }
}

/// Drops `.` and other non-name components so `./app` and `app` compare equal.
fn clean_relative(path: &Path) -> PathBuf {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect()
}

/// The project tree on disk.
pub struct DiskTree {
    root: PathBuf,
    layout: TreeLayout,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>, layout: TreeLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    fn check_root(&self, dir: &Path) -> Result<PathBuf, ScanError> {
        let abs = self.root.join(dir);
        match std::fs::metadata(&abs) {
            Ok(meta) if meta.is_dir() => Ok(abs),
            Ok(_) => Err(ScanError::NotADirectory(abs)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScanError::RootMissing(abs)),
            Err(e) => Err(ScanError::Walk {
                path: abs,
                message: e.to_string(),
            }),
        }
    }

    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root).unwrap_or(path).to_path_buf()
    }

    /// Files under `dir` sorted by name per directory, depth first.
    ///
    /// With `prune` set, directories named in `exclude_dirs` are not entered.
    /// Entries that fail to read are returned separately so callers decide
    /// whether a partial listing is acceptable.
    fn walk(&self, dir: &Path, prune: bool) -> Result<(Vec<PathBuf>, Vec<ScanError>), ScanError> {
        let abs = self.check_root(dir)?;

        let mut builder = WalkBuilder::new(&abs);
        builder
            .standard_filters(false)
            .hidden(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        if prune {
            let excluded = self.layout.exclude_dirs.clone();
            builder.filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                !excluded.iter().any(|d| d.as_str() == name.as_ref())
            });
        }

        let mut files = Vec::new();
        let mut errors = Vec::new();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        files.push(self.relative(entry.path()));
                    }
                }
                Err(e) => {
                    let path = error_path(&e).unwrap_or(abs.as_path()).to_path_buf();
                    tracing::warn!(path = %path.display(), error = %e, "Walk entry failed");
                    errors.push(ScanError::Walk {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(root = %abs.display(), files = files.len(), "Walked directory");
        Ok((files, errors))
    }
}

/// The filesystem path an `ignore` error refers to, if it carries one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

impl SiteTree for DiskTree {
    fn list_routes(&self) -> Result<Vec<FilesystemRoute>, ScanError> {
        // Route folders may share names with build output; no pruning here.
        let (files, errors) = self.walk(&self.layout.pages_dir, false)?;
        // A partial route list would report pages as missing when they are not.
        if let Some(first) = errors.into_iter().next() {
            return Err(first);
        }
        Ok(routes_from_files(
            files,
            &self.layout.pages_dir,
            &self.layout.page_files,
        ))
    }

    fn list_text_files(&self) -> Result<TextFiles, ScanError> {
        let (files, errors) = self.walk(&self.layout.source_dir, true)?;
        let skipped = errors
            .into_iter()
            .map(|e| match e {
                ScanError::Walk { path, message } => ScanWarning {
                    file: self.relative(&path),
                    message,
                },
                other => ScanWarning {
                    file: self.layout.source_dir.clone(),
                    message: other.to_string(),
                },
            })
            .collect();
        Ok(TextFiles {
            files: files
                .into_iter()
                .filter(|f| self.layout.is_text_file(f))
                .collect(),
            skipped,
        })
    }

    fn read_text(&self, file: &Path) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(file))
    }
}

/// An in-memory project tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    layout: TreeLayout,
    files: BTreeMap<PathBuf, String>,
    unreadable: BTreeSet<PathBuf>,
    unlistable_dirs: BTreeSet<PathBuf>,
    missing_dirs: bool,
}

impl MemoryTree {
    pub fn new(layout: TreeLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// A file that is listed but fails on read.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    /// A directory whose contents cannot be listed. Files below it are hidden
    /// from the marker scan, which reports the directory as skipped.
    pub fn with_unlistable_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unlistable_dirs.insert(dir.into());
        self
    }

    /// Makes every listing fail as if the scan roots were absent.
    pub fn without_roots(mut self) -> Self {
        self.missing_dirs = true;
        self
    }

    fn files_under<'a>(&'a self, dir: &'a Path) -> impl Iterator<Item = &'a PathBuf> + 'a {
        self.files.keys().filter(move |f| f.starts_with(dir))
    }
}

impl SiteTree for MemoryTree {
    fn list_routes(&self) -> Result<Vec<FilesystemRoute>, ScanError> {
        if self.missing_dirs {
            return Err(ScanError::RootMissing(self.layout.pages_dir.clone()));
        }
        Ok(routes_from_files(
            self.files_under(&self.layout.pages_dir),
            &self.layout.pages_dir,
            &self.layout.page_files,
        ))
    }

    fn list_text_files(&self) -> Result<TextFiles, ScanError> {
        if self.missing_dirs {
            return Err(ScanError::RootMissing(self.layout.source_dir.clone()));
        }
        let source_dir = &self.layout.source_dir;
        let blocked = |f: &Path| self.unlistable_dirs.iter().any(|d| f.starts_with(d));

        let files = self
            .files_under(source_dir)
            .filter(|f| {
                !self.layout.in_excluded_dir(f) && !blocked(f.as_path()) && self.layout.is_text_file(f)
            })
            .cloned()
            .collect();
        let skipped = self
            .unlistable_dirs
            .iter()
            .filter(|d| d.starts_with(source_dir) && !self.layout.is_excluded_path(d))
            .map(|d| ScanWarning {
                file: d.clone(),
                message: "permission denied".to_string(),
            })
            .collect();
        Ok(TextFiles { files, skipped })
    }

    fn read_text(&self, file: &Path) -> io::Result<String> {
        if self.unreadable.contains(file) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .get(file)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_layout_cleans_relative_dirs() {
        let layout = TreeLayout::default()
            .with_pages_dir("./src/app/")
            .with_source_dir(".");
        assert_eq!(layout.pages_dir, PathBuf::from("src/app"));
        assert_eq!(layout.source_dir, PathBuf::new());
    }

    #[test]
    fn test_layout_text_and_exclusion_checks() {
        let layout = TreeLayout::default();
        assert!(layout.is_text_file(Path::new("app/page.TSX")));
        assert!(!layout.is_text_file(Path::new("public/logo.png")));
        assert!(!layout.is_text_file(Path::new("Makefile")));
        assert!(layout.in_excluded_dir(Path::new("node_modules/react/index.js")));
        assert!(layout.in_excluded_dir(Path::new("app/.next/cache.json")));
        assert!(!layout.in_excluded_dir(Path::new("app/build.ts")));
    }

    #[test]
    fn test_disk_routes_sorted_and_relative() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app/page.tsx", "");
        write(dir.path(), "app/mediation/page.tsx", "");
        write(dir.path(), "app/custody/page.tsx", "");
        write(dir.path(), "app/custody/layout.tsx", "");
        write(dir.path(), "app/_lib/page.tsx", "");

        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        let routes = tree.list_routes().unwrap();
        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/custody", "/mediation", "/"]);
        assert_eq!(routes[0].file, PathBuf::from("app/custody/page.tsx"));
    }

    #[test]
    fn test_disk_routes_ignore_scan_exclusions() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app/page.tsx", "");
        write(dir.path(), "app/build/page.tsx", "");
        write(dir.path(), "app/insurance/coverage/page.tsx", "// TODO premiums\n");

        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        let paths: Vec<_> = tree
            .list_routes()
            .unwrap()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/build", "/insurance/coverage", "/"]);

        let text = tree.list_text_files().unwrap();
        assert_eq!(text.files, vec![PathBuf::from("app/page.tsx")]);
    }

    #[test]
    fn test_disk_missing_pages_dir_is_scan_error() {
        let dir = TempDir::new().unwrap();
        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        assert!(matches!(
            tree.list_routes(),
            Err(ScanError::RootMissing(_))
        ));
    }

    #[test]
    fn test_disk_pages_dir_that_is_a_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app", "not a dir");
        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        assert!(matches!(
            tree.list_routes(),
            Err(ScanError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_disk_text_files_skip_excluded_and_non_text() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "app/page.tsx", "");
        write(dir.path(), "lib/util.ts", "");
        write(dir.path(), "public/logo.png", "");
        write(dir.path(), "node_modules/react/index.js", "");
        write(dir.path(), ".next/server/app.js", "");

        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        let listing = tree.list_text_files().unwrap();
        assert_eq!(
            listing.files,
            vec![PathBuf::from("app/page.tsx"), PathBuf::from("lib/util.ts")]
        );
        assert!(listing.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_disk_unreadable_dir_is_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "app/page.tsx", "");
        write(dir.path(), "lib/locked/secret.ts", "");
        let locked = dir.path().join("lib/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can read the directory anyway.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let tree = DiskTree::new(dir.path(), TreeLayout::default());
        let listing = tree.list_text_files().unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(listing.files, vec![PathBuf::from("app/page.tsx")]);
        assert_eq!(listing.skipped.len(), 1);
        assert_eq!(listing.skipped[0].file, PathBuf::from("lib/locked"));
    }

    #[test]
    fn test_memory_tree_matches_disk_conventions() {
        let tree = MemoryTree::new(TreeLayout::default())
            .with_file("app/page.tsx", "")
            .with_file("app/(legal)/enforcement/page.tsx", "")
            .with_file("node_modules/x/app/page.tsx", "")
            .with_file("lib/data.ts", "");

        let paths: Vec<_> = tree
            .list_routes()
            .unwrap()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/enforcement", "/"]);
        assert_eq!(tree.list_text_files().unwrap().files.len(), 3);
    }

    #[test]
    fn test_memory_routes_ignore_scan_exclusions() {
        let tree = MemoryTree::new(TreeLayout::default())
            .with_file("app/insurance/coverage/page.tsx", "// TODO premiums\n")
            .with_file("app/out/page.mdx", "");

        let paths: Vec<_> = tree
            .list_routes()
            .unwrap()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["/insurance/coverage", "/out"]);
        assert!(tree.list_text_files().unwrap().files.is_empty());
    }

    #[test]
    fn test_memory_unlistable_dir_hides_files() {
        let tree = MemoryTree::new(TreeLayout::default())
            .with_file("lib/data.ts", "")
            .with_file("lib/private/keys.ts", "")
            .with_unlistable_dir("lib/private")
            .with_unlistable_dir("node_modules/pkg");

        let listing = tree.list_text_files().unwrap();
        assert_eq!(listing.files, vec![PathBuf::from("lib/data.ts")]);
        assert_eq!(listing.skipped.len(), 1);
        assert_eq!(listing.skipped[0].file, PathBuf::from("lib/private"));
    }

    #[test]
    fn test_memory_tree_unreadable_and_missing() {
        let tree = MemoryTree::new(TreeLayout::default()).with_unreadable("lib/secret.ts");
        assert!(tree.read_text(Path::new("lib/secret.ts")).is_err());
        assert!(tree.read_text(Path::new("lib/none.ts")).is_err());

        let gone = MemoryTree::default().without_roots();
        assert!(gone.list_routes().is_err());
        assert!(gone.list_text_files().is_err());
    }
}
