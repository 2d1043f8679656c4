use crate::report::AuditReport;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{
    print_category_table, print_findings, print_json, print_page_list, print_route_list,
    print_unavailable, progress_bar,
};

pub fn handle_report(ctx: &CommandContext, max: Option<usize>, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let max_results = max.unwrap_or(ctx.config.scan.max_results);
    let report = AuditReport::build(
        registry.all_pages(),
        &ctx.tree(),
        ctx.config.routes.path_match,
        max_results,
    );

    if json {
        return print_json(&report);
    }

    println!("{}", "siteaudit report".bold());
    println!("{}", "═".repeat(60));
    println!();

    println!("{}", "Completion".bold());
    println!(
        "  {} of {} pages complete  {}",
        report.stats.complete,
        report.stats.total,
        progress_bar(report.stats.completion_rate)
    );
    println!(
        "  {} partial, {} placeholder, {} planned",
        report.stats.partial, report.stats.placeholder, report.stats.planned
    );
    println!();

    println!("{}", "Categories".bold());
    print_category_table(&report.categories);
    println!();

    println!("{}", "Undocumented Routes".bold());
    match report.routes.error {
        Some(ref e) => print_unavailable("Route discovery", e),
        None => print_route_list(&report.routes.undocumented),
    }
    println!();

    println!("{}", "Declared But Missing".bold());
    match report.routes.error {
        Some(ref e) => print_unavailable("Route discovery", e),
        None if report.routes.missing.is_empty() => {
            println!("Every declared page has a page file.")
        }
        None => print_page_list(&report.routes.missing),
    }
    println!();

    println!("{}", "Markers".bold());
    match report.todos.error {
        Some(ref e) => print_unavailable("Marker scan", e),
        None => {
            print_findings(&report.todos.scan.findings);
            if report.todos.scan.truncated {
                println!(
                    "{}",
                    format!("Stopped after {} findings", max_results).dimmed()
                );
            }
        }
    }

    println!();
    println!("{}", "═".repeat(60));
    println!(
        "Generated {}",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}
