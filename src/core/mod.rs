// Public modules
pub mod config;
pub mod defaults;
pub mod error;
pub mod output;
pub mod replacer;

// Re-export common types for convenience
pub use defaults::{CaseRule, RebrandConfig, Replacement};
pub use error::{Error, ErrorCode, Result};
pub use output::{FileError, RunReport, UpdatedFile};
