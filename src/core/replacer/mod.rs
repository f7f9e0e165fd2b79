//! Bulk text replacer — rewrite brand strings across a project tree.
//!
//! Walks the tree from a root, prunes excluded directories, and for each
//! eligible file applies the replacement table in order. Files are written
//! back atomically and only when their content changed. A failure on one
//! file is reported and the walk continues.

mod file;
mod table;
mod walk;

pub use file::{replace_in_file, write_atomic, FileOutcome};
pub use table::{CompiledTable, TableWarning, TableWarningKind};
pub use walk::{walk_files, FileFilter, WalkResult};

use std::io::{self, Write};
use std::path::Path;

use crate::defaults::RebrandConfig;
use crate::error::{Error, Result};
use crate::output::{FileError, RunReport, UpdatedFile};

/// Per-run switches that do not belong in the configuration file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Compute changes without writing them.
    pub dry_run: bool,
}

/// Process every eligible file under `root` without progress output.
pub fn run(root: &Path, config: &RebrandConfig, options: &RunOptions) -> Result<RunReport> {
    run_to(root, config, options, &mut io::sink())
}

/// Process every eligible file under `root`, writing one progress line per
/// updated or failed file to `out` as it is handled.
///
/// Only setup problems (bad root, uncompilable table) return `Err`; per-file
/// failures are collected in the report.
pub fn run_to<W: Write>(
    root: &Path,
    config: &RebrandConfig,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunReport> {
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Not a directory: {}", root.display()),
        ));
    }

    let table = CompiledTable::compile(&config.replacements)?;
    for warning in table.warnings() {
        crate::log_status!("rebrand", "warning: {}", warning.message);
    }

    if table.is_empty() {
        crate::log_status!("rebrand", "No replacements configured; files will only be scanned");
    }

    crate::log_status!(
        "rebrand",
        "Scanning {} ({} replacements{})",
        root.display(),
        table.len(),
        if options.dry_run { ", dry run" } else { "" }
    );

    let walk = walk_files(root, &FileFilter::from_config(config));

    let mut report = RunReport {
        root: root.display().to_string(),
        dry_run: options.dry_run,
        files_skipped: walk.skipped_files,
        dirs_skipped: walk.skipped_dirs,
        warnings: table.warnings().to_vec(),
        ..RunReport::default()
    };

    for (dir, err) in &walk.errors {
        record_error(&mut report, dir, err, out);
    }

    for path in &walk.files {
        report.files_scanned += 1;

        match replace_in_file(path, &table, options.dry_run) {
            Ok(FileOutcome::Unchanged) => {}
            Ok(FileOutcome::Updated { replacements }) => {
                let verb = if options.dry_run { "Would update" } else { "Updated" };
                writeln!(out, "{}: {}", verb, path.display()).ok();
                report.updated.push(UpdatedFile {
                    path: path.display().to_string(),
                    replacements,
                });
            }
            Err(err) => record_error(&mut report, path, &err, out),
        }
    }

    crate::log_status!(
        "rebrand",
        "{} scanned, {} updated, {} errors",
        report.files_scanned,
        report.updated.len(),
        report.errors.len()
    );

    Ok(report)
}

fn record_error<W: Write>(report: &mut RunReport, path: &Path, err: &Error, out: &mut W) {
    writeln!(out, "Error processing {}: {}", path.display(), err).ok();
    report
        .errors
        .push(FileError::from_error(path.display().to_string(), err));
}
