use super::types::TodoKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFinding {
    pub file: PathBuf,
    /// 1-based.
    pub line: usize,
    pub kind: TodoKind,
    pub text: String,
}

/// A file the scanner had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub file: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoScan {
    pub findings: Vec<TodoFinding>,
    /// True when more markers exist past the result limit.
    pub truncated: bool,
    pub files_scanned: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ScanWarning>,
}
