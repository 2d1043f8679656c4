use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use siteaudit::cli::handlers::{
    CommandContext, PagesParams, handle_attention, handle_categories, handle_init,
    handle_missing, handle_pages, handle_report, handle_stats, handle_todos,
    handle_undocumented,
};
use siteaudit::cli::{Cli, Commands};
use siteaudit::config::AuditConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    siteaudit::logging::init(cli.verbose, cli.log_file.clone());
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init {
            pages_dir,
            registry,
            force,
        } => handle_init(pages_dir, registry, force),
        Commands::Stats { json } => handle_stats(&load_context(config)?, json),
        Commands::Categories { json } => handle_categories(&load_context(config)?, json),
        Commands::Pages {
            status,
            category,
            priority,
            json,
        } => handle_pages(
            &load_context(config)?,
            PagesParams {
                status,
                category,
                priority,
                json,
            },
        ),
        Commands::Undocumented { json } => handle_undocumented(&load_context(config)?, json),
        Commands::Missing { json } => handle_missing(&load_context(config)?, json),
        Commands::Todos { max, json } => handle_todos(&load_context(config)?, max, json),
        Commands::Attention { json } => handle_attention(&load_context(config)?, json),
        Commands::Report { max, json } => handle_report(&load_context(config)?, max, json),
    }
}

fn load_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => AuditConfig::load_from(path),
        None => AuditConfig::load(&std::env::current_dir()?),
    }
    .context("Failed to load siteaudit configuration")?;
    Ok(CommandContext::new(config, root))
}
