use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::defaults::RewriteConfig;
use crate::error::{Error, Result};

/// Case-sensitive suffix match on the raw bytes of a bare file name.
///
/// Names that are not valid UTF-8 still match on their encoded bytes.
pub fn is_candidate(file_name: &OsStr, extensions: &[String]) -> bool {
    let name = file_name.as_encoded_bytes();
    extensions.iter().any(|ext| name.ends_with(ext.as_bytes()))
}

/// Collect every candidate file under the configured root.
///
/// Excluded directories are pruned before descent, so nothing beneath them is
/// ever listed. The root itself is not checked against the exclusion set.
pub fn walk_candidates(config: &RewriteConfig) -> Result<Vec<PathBuf>> {
    let root = &config.root;
    if !root.is_dir() {
        return Err(Error::root_not_found(root.display().to_string()));
    }

    let entries = read_sorted(root).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("list {}", root.display())))
    })?;

    let mut files = Vec::new();
    visit(entries, config, &mut files);
    Ok(files)
}

fn walk_recursive(dir: &Path, config: &RewriteConfig, files: &mut Vec<PathBuf>) {
    match read_sorted(dir) {
        Ok(entries) => visit(entries, config, files),
        Err(e) => {
            log_status!("rewrite", "Skipping unreadable directory {}: {}", dir.display(), e);
        }
    }
}

fn visit(entries: Vec<fs::DirEntry>, config: &RewriteConfig, files: &mut Vec<PathBuf>) {
    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        let name = entry.file_name();

        if file_type.is_dir() {
            if !config.is_excluded(&name) {
                walk_recursive(&path, config, files);
            }
            continue;
        }

        if !is_candidate(&name, &config.extensions) {
            continue;
        }

        // Links to directories are not followed. Dangling links stay candidates
        // so the failed read surfaces as a fault.
        if file_type.is_symlink() && path.is_dir() {
            continue;
        }
        if file_type.is_symlink() && !path.exists() {
            log_status!("rewrite", "Dangling link {}", path.display());
        }

        files.push(path);
    }
}

fn read_sorted(dir: &Path) -> std::io::Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)?.flatten().collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}
