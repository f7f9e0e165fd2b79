//! Compiled replacement table.
//!
//! Each configured key is escaped and compiled once. Keys are always literal
//! text; the case rule only decides whether case variants also match.

use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use std::borrow::Cow;

use crate::defaults::{CaseRule, Replacement};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
struct CompiledEntry {
    replacement: Replacement,
    matcher: Regex,
}

/// Kind of ordering hazard found between two table entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableWarningKind {
    /// A later key matches text inserted by an earlier entry.
    Chained,
    /// An earlier key matches inside a later key, so the later key can
    /// never match its full text.
    Shadowed,
}

/// An ordering hazard between two entries of the table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableWarning {
    pub kind: TableWarningKind,
    /// Index of the later entry.
    pub entry: usize,
    /// Index of the earlier entry it interacts with.
    pub earlier: usize,
    pub message: String,
}

/// Replacement table ready to apply to file content.
#[derive(Debug, Clone)]
pub struct CompiledTable {
    entries: Vec<CompiledEntry>,
    warnings: Vec<TableWarning>,
}

impl CompiledTable {
    pub fn compile(replacements: &[Replacement]) -> Result<Self> {
        let mut entries = Vec::with_capacity(replacements.len());

        for (index, replacement) in replacements.iter().enumerate() {
            if replacement.from.is_empty() {
                return Err(Error::config_invalid_value(
                    format!("replacements[{}].from", index),
                    None,
                    "replacement key must not be empty",
                ));
            }

            let matcher = RegexBuilder::new(&regex::escape(&replacement.from))
                .case_insensitive(replacement.case == CaseRule::Insensitive)
                .build()
                .map_err(|e| {
                    Error::config_invalid_value(
                        format!("replacements[{}].from", index),
                        Some(replacement.from.clone()),
                        e.to_string(),
                    )
                })?;

            entries.push(CompiledEntry {
                replacement: replacement.clone(),
                matcher,
            });
        }

        let warnings = detect_order_hazards(&entries);
        Ok(Self { entries, warnings })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn warnings(&self) -> &[TableWarning] {
        &self.warnings
    }

    /// Apply every entry in order. Returns the new text and the number of
    /// matches replaced across all entries.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut content = text.to_string();
        let mut total = 0;

        for entry in &self.entries {
            let to = entry.replacement.to.as_str();
            let mut count = 0;

            // Closure replacer inserts `to` verbatim; `$` is never expanded.
            let next = match entry.matcher.replace_all(&content, |_: &Captures| {
                count += 1;
                to
            }) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(replaced),
            };

            if let Some(replaced) = next {
                content = replaced;
                total += count;
            }
        }

        (content, total)
    }
}

fn detect_order_hazards(entries: &[CompiledEntry]) -> Vec<TableWarning> {
    let mut warnings = Vec::new();

    for (later_idx, later) in entries.iter().enumerate() {
        for (earlier_idx, earlier) in entries.iter().enumerate().take(later_idx) {
            if earlier.matcher.is_match(&later.replacement.from) {
                warnings.push(TableWarning {
                    kind: TableWarningKind::Shadowed,
                    entry: later_idx,
                    earlier: earlier_idx,
                    message: format!(
                        "'{}' is rewritten by earlier {} key '{}' before it can match",
                        later.replacement.from,
                        earlier.replacement.case.as_str(),
                        earlier.replacement.from
                    ),
                });
            }

            if later.matcher.is_match(&earlier.replacement.to) {
                warnings.push(TableWarning {
                    kind: TableWarningKind::Chained,
                    entry: later_idx,
                    earlier: earlier_idx,
                    message: format!(
                        "{} key '{}' also matches text inserted by earlier key '{}' ('{}')",
                        later.replacement.case.as_str(),
                        later.replacement.from,
                        earlier.replacement.from,
                        earlier.replacement.to
                    ),
                });
            }
        }
    }

    warnings
}
