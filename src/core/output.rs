//! Public output types for rebrand runs.
//!
//! These are serialised as the `data` payload of the JSON envelope and are
//! also returned to library callers of `replacer::run`.

use serde::Serialize;

use crate::error::Error;
use crate::replacer::TableWarning;

/// Summary of one pass over a directory tree.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub root: String,
    pub dry_run: bool,
    /// Eligible files that were read.
    pub files_scanned: usize,
    /// Files passed over for their name or extension.
    pub files_skipped: usize,
    /// Directories pruned by name.
    pub dirs_skipped: usize,
    pub updated: Vec<UpdatedFile>,
    pub errors: Vec<FileError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<TableWarning>,
}

impl RunReport {
    pub fn total_replacements(&self) -> usize {
        self.updated.iter().map(|u| u.replacements).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedFile {
    pub path: String,
    pub replacements: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileError {
    pub path: String,
    pub code: String,
    pub message: String,
}

impl FileError {
    pub fn from_error(path: impl Into<String>, err: &Error) -> Self {
        Self {
            path: path.into(),
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
