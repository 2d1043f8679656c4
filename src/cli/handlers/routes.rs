use crate::audit::{missing_declared_pages, undocumented_routes};
use crate::scan::SiteTree;
use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::{print_json, print_page_list, print_route_list};

pub fn handle_undocumented(ctx: &CommandContext, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let routes = ctx
        .tree()
        .list_routes()
        .context("Failed to discover page routes")?;
    let undocumented = undocumented_routes(
        registry.all_pages(),
        &routes,
        ctx.config.routes.path_match,
    );
    tracing::info!(
        discovered = routes.len(),
        undocumented = undocumented.len(),
        "Reconciled routes"
    );

    if json {
        return print_json(&undocumented);
    }

    print_route_list(&undocumented);
    Ok(())
}

pub fn handle_missing(ctx: &CommandContext, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let routes = ctx
        .tree()
        .list_routes()
        .context("Failed to discover page routes")?;
    let missing = missing_declared_pages(
        registry.all_pages(),
        &routes,
        ctx.config.routes.path_match,
    );

    if json {
        return print_json(&missing);
    }

    if missing.is_empty() {
        println!("Every declared page has a page file.");
        return Ok(());
    }
    print_page_list(&missing);
    Ok(())
}
