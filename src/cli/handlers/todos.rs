use crate::scan::scan_todos;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_findings, print_json};

pub fn handle_todos(ctx: &CommandContext, max: Option<usize>, json: bool) -> Result<()> {
    let max_results = max.unwrap_or(ctx.config.scan.max_results);
    let scan = scan_todos(&ctx.tree(), max_results).context("Failed to scan source files")?;

    if json {
        return print_json(&scan);
    }

    print_findings(&scan.findings);
    if scan.truncated {
        println!(
            "{}",
            format!("Stopped after {} findings (use --max to raise)", max_results).dimmed()
        );
    }
    for warning in &scan.warnings {
        println!(
            "  {} skipped {}: {}",
            "!".yellow(),
            warning.file.display(),
            warning.message
        );
    }
    Ok(())
}
