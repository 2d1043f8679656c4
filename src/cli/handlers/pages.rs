use crate::audit::{PageFilter, filter_pages, needs_attention};
use crate::cli::commands::{PagePriorityArg, PageStatusArg};
use anyhow::Result;

use super::CommandContext;
use super::utils::{print_json, print_page_list};

/// Parameters for the pages listing
pub struct PagesParams {
    pub status: Option<PageStatusArg>,
    pub category: Option<String>,
    pub priority: Option<PagePriorityArg>,
    pub json: bool,
}

pub fn handle_pages(ctx: &CommandContext, params: PagesParams) -> Result<()> {
    let registry = ctx.registry()?;
    let filter = PageFilter {
        status: params.status.map(Into::into),
        category: params.category,
        priority: params.priority.map(Into::into),
    };
    let pages = filter_pages(registry.all_pages(), &filter);

    if params.json {
        return print_json(&pages);
    }

    print_page_list(&pages);
    Ok(())
}

pub fn handle_attention(ctx: &CommandContext, json: bool) -> Result<()> {
    let registry = ctx.registry()?;
    let pending = needs_attention(registry.all_pages());

    if json {
        return print_json(&pending);
    }

    if pending.is_empty() {
        println!("Every declared page is complete.");
        return Ok(());
    }
    print_page_list(&pending);
    Ok(())
}
