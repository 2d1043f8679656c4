//! # siteaudit - audit a content site's page registry
//!
//! A content site keeps a hand-maintained registry of its pages with a
//! status, category and priority for each. `siteaudit` checks that registry
//! against the project tree and the source text.
//!
//! ## Features
//!
//! - **Completion statistics**: overall and per category
//! - **Route reconciliation**: page files missing from the registry, and
//!   registry entries without a page file
//! - **Marker scan**: bounded search for `TODO`, `FIXME` and `HACK` comments
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .siteaudit.toml and an example sitemap.yml
//! siteaudit init
//!
//! # Completion per category
//! siteaudit categories
//!
//! # Everything at once, as JSON
//! siteaudit report --json
//! ```
//!
//! ## Modules
//!
//! - [`audit`]: Pure aggregations over the registry and routes
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and project discovery
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (PageEntry, PageStatus, TodoFinding, etc.)
//! - [`registry`]: Loading and validating the declared registry
//! - [`report`]: Combined audit with per-section failure handling
//! - [`scan`]: Filesystem access, route discovery and the marker scan
//! - [`validation`]: Registry entry validation

/// Pure aggregations: statistics, category progress, reconciliation.
pub mod audit;

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.siteaudit.toml` files and project root discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `AuditError`, `ScanError` and `Result<T>`.
pub mod error;

pub mod logging;

/// Data models for the audit.
pub mod model;

/// The declared page registry.
pub mod registry;

pub mod report;

/// Read-only access to the project tree.
pub mod scan;

/// Registry entry validation.
pub mod validation;
