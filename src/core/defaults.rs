use serde::{Deserialize, Serialize};

/// Root configuration for a rebrand run.
///
/// Every section falls back to its built-in value when omitted from a
/// config file, so a file containing only `replacements` keeps the default
/// exclusions and extensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebrandConfig {
    /// Applied in order. Later entries see the output of earlier ones.
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,

    /// Directory names never descended into, at any depth.
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// File names never processed, in any directory.
    #[serde(default = "default_exclude_files")]
    pub exclude_files: Vec<String>,

    /// File name suffixes eligible for rewriting (e.g. ".md").
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for RebrandConfig {
    fn default() -> Self {
        Self {
            replacements: default_replacements(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
            extensions: default_extensions(),
        }
    }
}

/// One literal old → new pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub case: CaseRule,
}

impl Replacement {
    pub fn new(from: &str, to: &str, case: CaseRule) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            case,
        }
    }
}

/// How a replacement key is matched against file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseRule {
    /// Every case variant of the key is replaced.
    #[default]
    Insensitive,
    /// Only the exact key text is replaced.
    Exact,
}

impl CaseRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseRule::Insensitive => "insensitive",
            CaseRule::Exact => "exact",
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_replacements() -> Vec<Replacement> {
    use CaseRule::Insensitive;

    vec![
        Replacement::new("IRA Sathi", "Satpura Bio", Insensitive),
        Replacement::new("IRA SATHI", "Satpura Bio", Insensitive),
        Replacement::new("IRA-SATHI", "SATPURA-BIO", Insensitive),
        Replacement::new("IRASATHI", "SATPURABIO", Insensitive),
        Replacement::new("IRA Partner", "Satpura Bio Partner", Insensitive),
        Replacement::new("IRA ID", "Satpura ID", Insensitive),
        Replacement::new("ईरा साथी", "सतपुड़ा बायो", Insensitive),
        Replacement::new("आईआरए पार्टनर", "सतपुड़ा बायो", Insensitive),
        Replacement::new("ईरा आईडी", "सतपुड़ा आईडी", Insensitive),
        Replacement::new("/logo.png", "/assets/Satpura-1.webp", Insensitive),
        Replacement::new("IRA Sathi.png", "Satpura-1.webp", Insensitive),
    ]
}

fn default_exclude_dirs() -> Vec<String> {
    [".git", "node_modules", "dist", "build", ".next"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_files() -> Vec<String> {
    vec!["rename_project.py".to_string(), "Satpura-1.webp".to_string()]
}

fn default_extensions() -> Vec<String> {
    [".jsx", ".js", ".css", ".json", ".html", ".md", ".txt"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Get built-in configuration (ignoring any config file)
pub fn builtin_config() -> RebrandConfig {
    RebrandConfig::default()
}
