use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Complete,
    Partial,
    Placeholder,
    Planned,
}

impl PageStatus {
    pub const ALL: [PageStatus; 4] = [
        PageStatus::Complete,
        PageStatus::Partial,
        PageStatus::Placeholder,
        PageStatus::Planned,
    ];
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageStatus::Complete => write!(f, "complete"),
            PageStatus::Partial => write!(f, "partial"),
            PageStatus::Placeholder => write!(f, "placeholder"),
            PageStatus::Planned => write!(f, "planned"),
        }
    }
}

impl FromStr for PageStatus {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "complete" | "done" => Ok(PageStatus::Complete),
            "partial" => Ok(PageStatus::Partial),
            "placeholder" | "stub" => Ok(PageStatus::Placeholder),
            "planned" => Ok(PageStatus::Planned),
            _ => Err(AuditError::Parse(format!("Invalid page status: {}", s))),
        }
    }
}

/// Ordered from most to least urgent, so `Ord` sorts high first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PagePriority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for PagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PagePriority::High => write!(f, "high"),
            PagePriority::Medium => write!(f, "medium"),
            PagePriority::Low => write!(f, "low"),
        }
    }
}

impl FromStr for PagePriority {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" | "p1" => Ok(PagePriority::High),
            "medium" | "normal" | "p2" => Ok(PagePriority::Medium),
            "low" | "p3" => Ok(PagePriority::Low),
            _ => Err(AuditError::Parse(format!("Invalid priority: {}", s))),
        }
    }
}

/// Comment marker recognised by the source scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TodoKind {
    Todo,
    Fixme,
    Hack,
}

impl TodoKind {
    pub fn token(&self) -> &'static str {
        match self {
            TodoKind::Todo => "TODO",
            TodoKind::Fixme => "FIXME",
            TodoKind::Hack => "HACK",
        }
    }
}

impl fmt::Display for TodoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TodoKind {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TODO" => Ok(TodoKind::Todo),
            "FIXME" => Ok(TodoKind::Fixme),
            "HACK" => Ok(TodoKind::Hack),
            _ => Err(AuditError::Parse(format!("Invalid marker: {}", s))),
        }
    }
}
