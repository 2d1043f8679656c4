use super::tree::SiteTree;
use crate::error::ScanError;
use crate::model::{ScanWarning, TodoFinding, TodoKind, TodoScan};
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Longest `text` kept for a finding, in characters.
pub const MAX_SNIPPET_CHARS: usize = 160;

static MARKER: OnceLock<Regex> = OnceLock::new();

/// A comment opener at line start or after whitespace/punctuation, followed by
/// a marker word. The opener must not be glued to a word so `https://` never
/// counts as a comment.
fn marker_regex() -> &'static Regex {
    MARKER.get_or_init(|| {
        Regex::new(r"(?:^|[\s;{(])(?://+|/\*+|\{/\*|<!--|#|\*)\s*@?(TODO|FIXME|HACK)\b")
            .expect("marker pattern is valid")
    })
}

/// Returns the marker on `line`, if it carries one inside a comment.
pub fn find_marker(line: &str) -> Option<TodoKind> {
    let caps = marker_regex().captures(line)?;
    caps.get(1)?.as_str().parse().ok()
}

fn snippet(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= MAX_SNIPPET_CHARS {
        return trimmed.to_string();
    }
    trimmed.chars().take(MAX_SNIPPET_CHARS).collect()
}

/// Scans the tree's text files for comment markers, stopping after
/// `max_results` findings.
///
/// `truncated` is set only when a further marker was seen past the limit.
/// Unreadable files and directories are reported in [`TodoScan::warnings`]
/// and binary files are skipped; only a missing source root aborts.
pub fn scan_todos<T: SiteTree + ?Sized>(tree: &T, max_results: usize) -> Result<TodoScan, ScanError> {
    let listing = tree.list_text_files()?;
    let mut scan = TodoScan {
        warnings: listing.skipped,
        ..TodoScan::default()
    };

    'files: for file in listing.files {
        let content = match tree.read_text(&file) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = %file.display(), error = %e, "Skipping unreadable file");
                scan.warnings.push(ScanWarning {
                    file,
                    message: e.to_string(),
                });
                continue;
            }
        };
        if content.contains('\0') {
            tracing::debug!(file = %file.display(), "Skipping binary file");
            continue;
        }
        scan.files_scanned += 1;

        for (idx, line) in content.lines().enumerate() {
            let Some(kind) = find_marker(line) else {
                continue;
            };
            if scan.findings.len() >= max_results {
                scan.truncated = true;
                break 'files;
            }
            scan.findings.push(TodoFinding {
                file: file.clone(),
                line: idx + 1,
                kind,
                text: snippet(line),
            });
        }
    }

    tracing::debug!(
        findings = scan.findings.len(),
        files = scan.files_scanned,
        truncated = scan.truncated,
        "Marker scan finished"
    );
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::tree::{MemoryTree, TreeLayout};
    use std::path::PathBuf;

    #[test]
    fn test_find_marker_comment_styles() {
        assert_eq!(find_marker("// TODO: add citations"), Some(TodoKind::Todo));
        assert_eq!(find_marker("  /* FIXME broken link */"), Some(TodoKind::Fixme));
        assert_eq!(
            find_marker("      {/* TODO: add custody chart */}"),
            Some(TodoKind::Todo)
        );
        assert_eq!(find_marker("# HACK until upstream fix"), Some(TodoKind::Hack));
        assert_eq!(find_marker("<!-- TODO review -->"), Some(TodoKind::Todo));
        assert_eq!(find_marker(" * TODO document props"), Some(TodoKind::Todo));
        assert_eq!(find_marker("const x = 1; // FIXME"), Some(TodoKind::Fixme));
    }

    #[test]
    fn test_find_marker_ignores_non_comments() {
        assert_eq!(find_marker("const TODO = 'label';"), None);
        assert_eq!(find_marker("<p>Keep a TODO list for court</p>"), None);
        assert_eq!(find_marker("// TODOS are tracked elsewhere"), None);
        assert_eq!(find_marker("see https://TODO.example.com"), None);
        assert_eq!(find_marker("// todo lowercase is ignored"), None);
    }

    #[test]
    fn test_snippet_trims_and_truncates() {
        assert_eq!(snippet("   // TODO x   "), "// TODO x");
        let long = format!("// TODO {}", "é".repeat(400));
        assert_eq!(snippet(&long).chars().count(), MAX_SNIPPET_CHARS);
    }

    fn tree() -> MemoryTree {
        MemoryTree::new(TreeLayout::default())
            .with_file(
                "app/custody/page.tsx",
                "export default function Page() {\n  // TODO: add parenting plan\n  return null;\n}\n",
            )
            .with_file(
                "lib/registry.ts",
                "// FIXME wrong category\nexport const pages = [];\n// HACK temporary\n",
            )
            .with_file("app/page.tsx", "/* TODO hero copy */\n")
    }

    #[test]
    fn test_scan_collects_all_in_stable_order() {
        let scan = scan_todos(&tree(), DEFAULT_MAX_RESULTS).unwrap();
        let found: Vec<_> = scan
            .findings
            .iter()
            .map(|f| (f.file.to_string_lossy().into_owned(), f.line, f.kind))
            .collect();
        assert_eq!(
            found,
            vec![
                ("app/custody/page.tsx".to_string(), 2, TodoKind::Todo),
                ("app/page.tsx".to_string(), 1, TodoKind::Todo),
                ("lib/registry.ts".to_string(), 1, TodoKind::Fixme),
                ("lib/registry.ts".to_string(), 3, TodoKind::Hack),
            ]
        );
        assert!(!scan.truncated);
        assert_eq!(scan.files_scanned, 3);
        assert_eq!(scan.findings[0].text, "// TODO: add parenting plan");
    }

    #[test]
    fn test_scan_stops_at_max_results() {
        let full = scan_todos(&tree(), DEFAULT_MAX_RESULTS).unwrap();
        let limited = scan_todos(&tree(), 2).unwrap();
        assert_eq!(limited.findings.len(), 2);
        assert!(limited.truncated);
        assert_eq!(limited.findings[..], full.findings[..2]);
    }

    #[test]
    fn test_scan_exact_limit_is_not_truncated() {
        let scan = scan_todos(&tree(), 4).unwrap();
        assert_eq!(scan.findings.len(), 4);
        assert!(!scan.truncated);
    }

    #[test]
    fn test_scan_zero_limit() {
        let scan = scan_todos(&tree(), 0).unwrap();
        assert!(scan.findings.is_empty());
        assert!(scan.truncated);
    }

    #[test]
    fn test_scan_skips_unreadable_and_binary() {
        let tree = tree()
            .with_unreadable("lib/locked.ts")
            .with_file("lib/blob.json", "\0\0// TODO hidden");
        let scan = scan_todos(&tree, DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(scan.findings.len(), 4);
        assert_eq!(scan.warnings.len(), 1);
        assert_eq!(scan.warnings[0].file, PathBuf::from("lib/locked.ts"));
        assert_eq!(scan.files_scanned, 3);
    }

    #[test]
    fn test_truncated_only_when_another_marker_follows() {
        let quiet_tail = MemoryTree::new(TreeLayout::default())
            .with_file("app/page.tsx", "// TODO intake form\nconst fee = 349;\n")
            .with_file("lib/fees.ts", "export const filing = 349;\n");
        let scan = scan_todos(&quiet_tail, 1).unwrap();
        assert_eq!(scan.findings.len(), 1);
        assert!(!scan.truncated);

        let more = quiet_tail.with_file("lib/zz.ts", "// HACK rounding\n");
        let scan = scan_todos(&more, 1).unwrap();
        assert_eq!(scan.findings.len(), 1);
        assert!(scan.truncated);
    }

    #[test]
    fn test_scan_reports_unlistable_dirs() {
        let tree = tree()
            .with_file("lib/vendor/shim.ts", "// TODO never seen\n")
            .with_unlistable_dir("lib/vendor");
        let scan = scan_todos(&tree, DEFAULT_MAX_RESULTS).unwrap();
        assert_eq!(scan.findings.len(), 4);
        assert_eq!(scan.warnings.len(), 1);
        assert_eq!(scan.warnings[0].file, PathBuf::from("lib/vendor"));
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let tree = MemoryTree::default().without_roots();
        assert!(scan_todos(&tree, 10).is_err());
    }
}
