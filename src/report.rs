//! One-shot audit combining every aggregate.
//!
//! Scan failures do not fail the report: the affected section comes back
//! empty with its error message set, so a caller can still show the
//! registry statistics next to a "no data available" notice.

use crate::audit::{
    CategoryProgress, PathMatch, PriorityBreakdown, Stats, category_progress,
    missing_declared_pages, priority_breakdown, sitemap_stats, undocumented_routes,
};
use crate::model::{FilesystemRoute, PageEntry, TodoScan};
use crate::scan::{SiteTree, scan_todos};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteAudit {
    pub discovered: usize,
    pub undocumented: Vec<FilesystemRoute>,
    pub missing: Vec<PageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteAudit {
    pub fn run<T: SiteTree + ?Sized>(pages: &[PageEntry], tree: &T, mode: PathMatch) -> Self {
        match tree.list_routes() {
            Ok(routes) => Self {
                discovered: routes.len(),
                undocumented: undocumented_routes(pages, &routes, mode),
                missing: missing_declared_pages(pages, &routes, mode),
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Route discovery failed");
                Self {
                    error: Some(e.to_string()),
                    ..Self::default()
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoAudit {
    #[serde(flatten)]
    pub scan: TodoScan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TodoAudit {
    pub fn run<T: SiteTree + ?Sized>(tree: &T, max_results: usize) -> Self {
        match scan_todos(tree, max_results) {
            Ok(scan) => Self { scan, error: None },
            Err(e) => {
                tracing::warn!(error = %e, "Marker scan failed");
                Self {
                    scan: TodoScan::default(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated_at: DateTime<Utc>,
    pub stats: Stats,
    pub priorities: PriorityBreakdown,
    pub categories: Vec<CategoryProgress>,
    pub routes: RouteAudit,
    pub todos: TodoAudit,
}

impl AuditReport {
    pub fn build<T: SiteTree + ?Sized>(
        pages: &[PageEntry],
        tree: &T,
        mode: PathMatch,
        max_results: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            stats: sitemap_stats(pages),
            priorities: priority_breakdown(pages),
            categories: category_progress(pages),
            routes: RouteAudit::run(pages, tree, mode),
            todos: TodoAudit::run(tree, max_results),
        }
    }

    /// True when every section was computed.
    pub fn is_complete(&self) -> bool {
        self.routes.error.is_none() && self.todos.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageStatus;
    use crate::scan::{MemoryTree, TreeLayout};

    fn pages() -> Vec<PageEntry> {
        vec![
            PageEntry::new("/a", "A", "General", PageStatus::Complete),
            PageEntry::new("/b", "B", "General", PageStatus::Planned),
        ]
    }

    #[test]
    fn test_report_collects_every_section() {
        let tree = MemoryTree::new(TreeLayout::default())
            .with_file("app/a/page.tsx", "// TODO finish intro\n")
            .with_file("app/c/page.tsx", "");

        let report = AuditReport::build(&pages(), &tree, PathMatch::Exact, 10);
        assert!(report.is_complete());
        assert_eq!(report.stats.completion_rate, 50);
        assert_eq!(report.routes.discovered, 2);
        assert_eq!(report.routes.undocumented[0].path, "/c");
        assert_eq!(report.routes.missing[0].path, "/b");
        assert_eq!(report.todos.scan.findings.len(), 1);
    }

    #[test]
    fn test_report_degrades_on_scan_failure() {
        let tree = MemoryTree::default().without_roots();
        let report = AuditReport::build(&pages(), &tree, PathMatch::Exact, 10);

        assert!(!report.is_complete());
        assert_eq!(report.stats.total, 2);
        assert!(report.routes.undocumented.is_empty());
        assert!(report.routes.missing.is_empty());
        assert!(report.routes.error.is_some());
        assert!(report.todos.error.is_some());
    }

    #[test]
    fn test_report_json_shape() {
        let tree = MemoryTree::new(TreeLayout::default());
        let report = AuditReport::build(&pages(), &tree, PathMatch::Exact, 10);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["stats"]["total"], 2);
        assert_eq!(value["todos"]["findings"], serde_json::json!([]));
        assert!(value["routes"].get("error").is_none());
    }
}
