use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "siteaudit")]
#[command(
    author,
    version,
    about = "Audit a site's declared page registry against its page tree"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .siteaudit.toml by default)
    #[arg(long, global = true, env = "SITEAUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a config file and an example registry
    Init {
        /// Directory holding page routes
        #[arg(long)]
        pages_dir: Option<String>,

        /// Registry file name (.yml, .yaml, .toml or .json)
        #[arg(long)]
        registry: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Overall completion statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Completion progress per category
    #[command(visible_alias = "cats")]
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List declared pages
    #[command(visible_alias = "ls")]
    Pages {
        /// Filter by status
        #[arg(short, long, value_enum)]
        status: Option<PageStatusArg>,

        /// Filter by category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by priority
        #[arg(short, long, value_enum)]
        priority: Option<PagePriorityArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Page files on disk that the registry does not declare
    Undocumented {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Declared pages with no page file on disk
    Missing {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scan source files for TODO/FIXME/HACK comments
    Todos {
        /// Stop after this many findings (defaults to scan.max_results)
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Unfinished pages ordered by priority
    Attention {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Full audit: stats, categories, route reconciliation and markers
    Report {
        /// Stop the marker scan after this many findings
        #[arg(short = 'n', long)]
        max: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PageStatusArg {
    Complete,
    Partial,
    Placeholder,
    Planned,
}

impl From<PageStatusArg> for crate::model::PageStatus {
    fn from(arg: PageStatusArg) -> Self {
        match arg {
            PageStatusArg::Complete => crate::model::PageStatus::Complete,
            PageStatusArg::Partial => crate::model::PageStatus::Partial,
            PageStatusArg::Placeholder => crate::model::PageStatus::Placeholder,
            PageStatusArg::Planned => crate::model::PageStatus::Planned,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PagePriorityArg {
    High,
    Medium,
    Low,
}

impl From<PagePriorityArg> for crate::model::PagePriority {
    fn from(arg: PagePriorityArg) -> Self {
        match arg {
            PagePriorityArg::High => crate::model::PagePriority::High,
            PagePriorityArg::Medium => crate::model::PagePriority::Medium,
            PagePriorityArg::Low => crate::model::PagePriority::Low,
        }
    }
}
