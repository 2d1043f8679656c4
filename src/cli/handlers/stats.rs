use crate::audit::{category_progress, priority_breakdown, sitemap_stats};
use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::CommandContext;
use super::utils::{print_category_table, print_json, progress_bar};

pub fn handle_stats(ctx: &CommandContext, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let stats = sitemap_stats(registry.all_pages());
    let priorities = priority_breakdown(registry.all_pages());

    if json {
        let mut value = serde_json::to_value(&stats)?;
        value["priorities"] = json!(priorities);
        return print_json(&value);
    }

    println!("{}", "Sitemap".bold());
    println!("  Pages:       {}", stats.total);
    println!("  Complete:    {}", stats.complete.to_string().green());
    println!("  Partial:     {}", stats.partial.to_string().yellow());
    println!("  Placeholder: {}", stats.placeholder.to_string().magenta());
    println!("  Planned:     {}", stats.planned.to_string().dimmed());
    println!("  Progress:    {}", progress_bar(stats.completion_rate));
    println!(
        "  Priority:    {} high, {} medium, {} low",
        priorities.high.to_string().red(),
        priorities.medium,
        priorities.low
    );
    println!("  Categories:  {}", stats.categories.join(", "));
    Ok(())
}

pub fn handle_categories(ctx: &CommandContext, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let progress = category_progress(registry.all_pages());

    if json {
        return print_json(&progress);
    }

    print_category_table(&progress);
    Ok(())
}
