use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::{io, paths};

/// What to do when a candidate file cannot be read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Stop the run at the first fault.
    #[default]
    Abort,
    /// Report the fault and continue with the next file.
    Skip,
}

/// One literal substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Root configuration structure for borderfix.json
///
/// Every field is optional in the file; missing fields keep the built-in value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,

    #[serde(default)]
    pub on_error: FaultPolicy,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude_dirs: default_exclude_dirs(),
            extensions: default_extensions(),
            replacements: default_replacements(),
            on_error: FaultPolicy::default(),
        }
    }
}

impl RewriteConfig {
    /// Build a config for `root` with the built-in filters and table.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Exact match against a raw directory name.
    pub fn is_excluded(&self, dir_name: &OsStr) -> bool {
        self.exclude_dirs.iter().any(|d| OsStr::new(d) == dir_name)
    }

    /// Reject values that would make a run meaningless or destructive.
    ///
    /// An empty `from` would match between every character, so it is an error
    /// rather than a silent no-op.
    pub fn validate(&self) -> Result<()> {
        for (i, rule) in self.replacements.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(Error::config_invalid_value(
                    format!("replacements[{}].from", i),
                    Some(rule.from.clone()),
                    "must not be empty",
                ));
            }
        }

        for (i, ext) in self.extensions.iter().enumerate() {
            if ext.is_empty() {
                return Err(Error::config_invalid_value(
                    format!("extensions[{}]", i),
                    Some(ext.clone()),
                    "must not be empty",
                ));
            }
        }

        for (i, dir) in self.exclude_dirs.iter().enumerate() {
            if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
                return Err(Error::config_invalid_value(
                    format!("exclude_dirs[{}]", i),
                    Some(dir.clone()),
                    "must be a bare directory name",
                )
                .with_hint("Exclusions match directory names, not paths"));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Default value functions (the stock border palette fix)
// =============================================================================

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_exclude_dirs() -> Vec<String> {
    ["node_modules", ".git", "dist", ".next"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_extensions() -> Vec<String> {
    [".tsx", ".ts", ".css"].iter().map(|s| s.to_string()).collect()
}

fn default_replacements() -> Vec<Replacement> {
    vec![
        // Higher contrast borders
        Replacement::new("border-[#1A1A1A]", "border-[#333]"),
        Replacement::new("border-[#111]", "border-[#444]"),
    ]
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load the config for a run.
///
/// An explicit path must exist and parse. Without one, the global
/// borderfix.json is used when present and silently ignored otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<RewriteConfig> {
    match explicit {
        Some(path) => load_config_from_file(path),
        None => Ok(load_global_config().unwrap_or_default()),
    }
}

fn load_global_config() -> Result<RewriteConfig> {
    let path = paths::borderfix_json()?;

    if !path.exists() {
        return Err(Error::internal_unexpected("borderfix.json not found"));
    }

    load_config_from_file(&path)
}

/// Parse a config file, filling missing fields with built-in defaults.
pub fn load_config_from_file(path: &Path) -> Result<RewriteConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<RewriteConfig> {
    serde_json::from_str(content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}
