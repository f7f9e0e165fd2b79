use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::table::CompiledTable;
use crate::error::{Error, Result};

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Unchanged,
    /// Content changed (written unless this was a dry run).
    Updated { replacements: usize },
}

/// Apply the table to one file, rewriting it only if the content changed.
pub fn replace_in_file(path: &Path, table: &CompiledTable, dry_run: bool) -> Result<FileOutcome> {
    let bytes = fs::read(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    let content = std::str::from_utf8(&bytes)
        .map_err(|e| Error::file_not_utf8(path.display().to_string(), &e))?;

    let (new_content, replacements) = table.apply(content);

    if new_content == content {
        return Ok(FileOutcome::Unchanged);
    }

    if !dry_run {
        write_atomic(path, &new_content)?;
    }

    Ok(FileOutcome::Updated { replacements })
}

/// Write `content` over `path` via a temp file in the same directory.
///
/// A symlink is resolved first so the link itself survives and its target
/// receives the new content. The original permissions are carried over, and
/// a read-only file is refused rather than replaced through its directory.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("resolve {}", path.display())))
    })?;

    let parent = target.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", target.display()),
            Some("write file".to_string()),
        )
    })?;

    let permissions = fs::metadata(&target)
        .map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("stat {}", target.display())))
        })?
        .permissions();

    if permissions.readonly() {
        return Err(Error::internal_io(
            "Permission denied: file is read-only",
            Some(format!("write {}", target.display())),
        ));
    }

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("create temp file in {}", parent.display())),
        )
    })?;

    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| Error::internal_io(e.to_string(), Some("write temp file".to_string())))?;

    tmp.as_file().set_permissions(permissions).map_err(|e| {
        Error::internal_io(e.to_string(), Some("copy permissions".to_string()))
    })?;

    tmp.persist(&target).map_err(|e| {
        Error::internal_io(
            e.error.to_string(),
            Some(format!("replace {}", target.display())),
        )
    })?;

    Ok(())
}
