//! Validation for declared registry entries.

use crate::error::{AuditError, Result};
use crate::model::PageEntry;
use std::collections::HashSet;

/// Maximum allowed length for a page title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for a route path.
pub const MAX_PATH_LENGTH: usize = 512;

/// Validates a route path.
pub fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AuditError::Validation("Path cannot be empty".to_string()));
    }
    if !path.starts_with('/') {
        return Err(AuditError::Validation(format!(
            "Path must start with '/': {}",
            path
        )));
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(AuditError::Validation(format!(
            "Path exceeds maximum length of {} characters",
            MAX_PATH_LENGTH
        )));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(AuditError::Validation(format!(
            "Path cannot contain whitespace: {}",
            path
        )));
    }
    Ok(())
}

/// Validates a page title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AuditError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(AuditError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(AuditError::Validation(
            "Category cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn at_path(err: AuditError, path: &str) -> AuditError {
    match err {
        AuditError::Validation(msg) => AuditError::Validation(format!("{} ({})", msg, path)),
        other => other,
    }
}

/// Validates every entry and that no path is declared twice.
pub fn validate_entries(pages: &[PageEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for page in pages {
        validate_path(&page.path)?;
        validate_title(&page.title).map_err(|e| at_path(e, &page.path))?;
        validate_category(&page.category).map_err(|e| at_path(e, &page.path))?;
        if !seen.insert(page.path.as_str()) {
            return Err(AuditError::Validation(format!(
                "Duplicate page path: {}",
                page.path
            )));
        }
    }
    Ok(())
}
