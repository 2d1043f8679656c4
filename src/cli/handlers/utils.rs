use crate::audit::CategoryProgress;
use crate::model::{FilesystemRoute, PageEntry, PagePriority, PageStatus, TodoFinding, TodoKind};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

const BAR_WIDTH: usize = 20;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format status with color coding
pub fn format_status(status: PageStatus) -> colored::ColoredString {
    match status {
        PageStatus::Complete => "complete".green(),
        PageStatus::Partial => "partial".yellow(),
        PageStatus::Placeholder => "placeholder".magenta(),
        PageStatus::Planned => "planned".dimmed(),
    }
}

/// Format priority with color coding
pub fn format_priority(priority: PagePriority) -> colored::ColoredString {
    match priority {
        PagePriority::High => "high".red(),
        PagePriority::Medium => "medium".white(),
        PagePriority::Low => "low".dimmed(),
    }
}

pub fn format_kind(kind: TodoKind) -> colored::ColoredString {
    match kind {
        TodoKind::Todo => "TODO".yellow(),
        TodoKind::Fixme => "FIXME".red(),
        TodoKind::Hack => "HACK".magenta(),
    }
}

/// `[#########...........]  45%`
pub fn progress_bar(rate: u32) -> String {
    let filled = (rate.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled).green(),
        ".".repeat(BAR_WIDTH - filled).dimmed(),
        rate
    )
}

/// Print a list of pages (compact format)
pub fn print_page_list(pages: &[PageEntry]) {
    if pages.is_empty() {
        println!("No pages found.");
        return;
    }

    for page in pages {
        println!(
            "{} {} [{}] {} {}",
            page.path.cyan(),
            format_status(page.status),
            format_priority(page.priority),
            page.title,
            format!("({})", page.category).dimmed()
        );
        if let Some(ref notes) = page.notes {
            println!("    {}", notes.dimmed());
        }
    }
}

pub fn print_category_table(categories: &[CategoryProgress]) {
    if categories.is_empty() {
        println!("No categories.");
        return;
    }

    let width = categories
        .iter()
        .map(|c| c.category.chars().count())
        .max()
        .unwrap_or(0);
    for c in categories {
        println!(
            "{}  {}  {}/{} complete, {} partial, {} placeholder, {} planned",
            format!("{:<width$}", c.category, width = width).bold(),
            progress_bar(c.completion_rate),
            c.complete,
            c.total,
            c.partial,
            c.placeholder,
            c.planned
        );
    }
}

pub fn print_route_list(routes: &[FilesystemRoute]) {
    if routes.is_empty() {
        println!("No undocumented routes.");
        return;
    }

    for route in routes {
        println!(
            "{} {}",
            route.path.cyan(),
            route.file.display().to_string().dimmed()
        );
    }
}

pub fn print_findings(findings: &[TodoFinding]) {
    if findings.is_empty() {
        println!("No markers found.");
        return;
    }

    for finding in findings {
        println!(
            "{}:{} {} {}",
            finding.file.display().to_string().cyan(),
            finding.line,
            format_kind(finding.kind),
            finding.text
        );
    }
}

/// Red banner shown in place of a section that could not be computed.
pub fn print_unavailable(section: &str, error: &str) {
    println!(
        "  {} {} unavailable: {}",
        "✗".red(),
        section,
        error.red()
    );
}
