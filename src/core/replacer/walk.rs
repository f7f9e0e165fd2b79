use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::RebrandConfig;
use crate::error::Error;

/// Name-based eligibility rules for the walk.
#[derive(Debug, Clone)]
pub struct FileFilter {
    exclude_dirs: HashSet<String>,
    exclude_files: HashSet<String>,
    extensions: Vec<String>,
}

impl FileFilter {
    pub fn from_config(config: &RebrandConfig) -> Self {
        Self {
            exclude_dirs: config.exclude_dirs.iter().cloned().collect(),
            exclude_files: config.exclude_files.iter().cloned().collect(),
            extensions: config.extensions.clone(),
        }
    }

    pub fn allows_dir(&self, name: &str) -> bool {
        !self.exclude_dirs.contains(name)
    }

    /// Exact-name exclusion first, then a literal suffix check.
    pub fn allows_file(&self, name: &str) -> bool {
        if self.exclude_files.contains(name) {
            return false;
        }
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

/// Files selected by a walk, plus what was passed over.
#[derive(Debug, Default)]
pub struct WalkResult {
    pub files: Vec<PathBuf>,
    pub skipped_files: usize,
    pub skipped_dirs: usize,
    pub errors: Vec<(PathBuf, Error)>,
}

/// Collect eligible files under `root`, depth-first, entries sorted by name.
///
/// Excluded directories are pruned before descending. Symlinked directories
/// are not followed; symlinked files are treated like regular files, and a
/// dangling link with an eligible name is kept so the open failure is reported.
pub fn walk_files(root: &Path, filter: &FileFilter) -> WalkResult {
    let mut result = WalkResult::default();
    walk_recursive(root, filter, &mut result);
    result
}

fn walk_recursive(dir: &Path, filter: &FileFilter, result: &mut WalkResult) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            result.errors.push((
                dir.to_path_buf(),
                Error::internal_io(e.to_string(), Some("read directory".to_string())),
            ));
            return;
        }
    };

    let mut listed = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => listed.push(entry),
            Err(e) => result.errors.push((
                dir.to_path_buf(),
                Error::internal_io(e.to_string(), Some("read directory entry".to_string())),
            )),
        }
    }
    listed.sort_by_key(|entry| entry.file_name());

    for entry in listed {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                result.errors.push((
                    path,
                    Error::internal_io(e.to_string(), Some("read file type".to_string())),
                ));
                continue;
            }
        };

        let is_file = if file_type.is_symlink() {
            // Only follow the link far enough to see whether it is a file.
            // A dangling link stays a candidate so opening it reports the error.
            match fs::metadata(&path) {
                Ok(meta) => meta.is_file(),
                Err(_) => true,
            }
        } else if file_type.is_dir() {
            if filter.allows_dir(&name) {
                walk_recursive(&path, filter, result);
            } else {
                result.skipped_dirs += 1;
            }
            continue;
        } else {
            file_type.is_file()
        };

        if !is_file {
            continue;
        }

        if filter.allows_file(&name) {
            result.files.push(path);
        } else {
            result.skipped_files += 1;
        }
    }
}
