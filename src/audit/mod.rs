//! Pure aggregations over the declared registry and discovered routes.
//!
//! Nothing in here touches the filesystem; callers pass the registry and the
//! route list in, so every function is deterministic for a given input.

mod filter;
mod reconcile;
mod stats;

pub use filter::{PageFilter, filter_pages};
pub use reconcile::{PathMatch, missing_declared_pages, undocumented_routes};
pub use stats::{
    CategoryProgress, PriorityBreakdown, Stats, StatusCounts, category_progress, completion_rate,
    count_statuses, needs_attention, priority_breakdown, sitemap_stats,
};
