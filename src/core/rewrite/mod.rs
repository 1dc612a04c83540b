//! Tree rewriting — literal token replacement across a source tree.
//!
//! Walks the configured root (pruning excluded directories), runs the
//! replacement table over every candidate file, and writes a file back only
//! when its content changed.

mod replace;
mod walk;

pub use replace::{apply_replacements, Replaced};
pub use walk::{is_candidate, walk_candidates};

use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use crate::defaults::{FaultPolicy, Replacement, RewriteConfig};
use crate::error::{Error, Result};
use crate::io::{read_source, write_source};

/// A file that was rewritten.
#[derive(Debug, Clone, Serialize)]
pub struct FileUpdate {
    /// File path relative to root.
    pub file: String,
    /// Occurrences replaced in this file.
    pub replacements: usize,
}

/// A file that was skipped because it could not be read or written.
#[derive(Debug, Clone, Serialize)]
pub struct FileFault {
    pub file: String,
    pub code: String,
    pub error: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub root: String,
    /// Candidate files visited.
    pub scanned: usize,
    pub updated: Vec<FileUpdate>,
    pub faults: Vec<FileFault>,
}

/// Read, transform and conditionally write a single file.
///
/// Returns the replacement count when the file was written, `None` when its
/// content was already up to date.
pub fn rewrite_file(path: &Path, table: &[Replacement]) -> Result<Option<usize>> {
    let original = read_source(path)?;
    let replaced = apply_replacements(&original, table);

    if !replaced.changed(&original) {
        return Ok(None);
    }

    write_source(path, &replaced.content)?;
    Ok(Some(replaced.replacements))
}

/// Rewrite every candidate under `config.root`.
///
/// One `Updated borders in <path>` line is written to `notices` per file, as
/// soon as that file has been written.
pub fn rewrite_tree<W: Write>(config: &RewriteConfig, notices: &mut W) -> Result<RewriteReport> {
    config.validate()?;
    log_status!("rewrite", "Scanning {}", config.root.display());

    let files = walk_candidates(config)?;
    let mut report = RewriteReport {
        root: config.root.display().to_string(),
        scanned: files.len(),
        updated: Vec::new(),
        faults: Vec::new(),
    };

    for path in files {
        let relative = relative_to(&path, &config.root);

        match rewrite_file(&path, &config.replacements) {
            Ok(Some(replacements)) => {
                emit_notice(notices, &path)?;
                report.updated.push(FileUpdate {
                    file: relative,
                    replacements,
                });
            }
            Ok(None) => {}
            Err(err) if config.on_error == FaultPolicy::Skip => {
                let reason = err.detail_error().unwrap_or(&err.message).to_string();
                eprintln!("[rewrite] Skipping {}: {}", path.display(), reason);
                report.faults.push(FileFault {
                    file: relative,
                    code: err.code.as_str().to_string(),
                    error: reason,
                });
            }
            Err(err) => return Err(err),
        }
    }

    log_status!(
        "rewrite",
        "Scanned {} file(s), updated {}, skipped {}",
        report.scanned,
        report.updated.len(),
        report.faults.len()
    );

    Ok(report)
}

fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn emit_notice<W: Write>(notices: &mut W, path: &Path) -> Result<()> {
    match writeln!(notices, "Updated borders in {}", path.display()) {
        Ok(()) => Ok(()),
        // Exit gracefully on SIGPIPE
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(Error::internal_io(
            e.to_string(),
            Some("write notice".to_string()),
        )),
    }
}
