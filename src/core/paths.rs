use crate::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Base borderfix config directory (~/.config/borderfix/ on all platforms)
pub fn borderfix() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("borderfix"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("borderfix"))
    }
}

/// Global borderfix.json config file path
pub fn borderfix_json() -> Result<PathBuf> {
    Ok(borderfix()?.join("borderfix.json"))
}

/// Expand `~` and make a root path absolute against the current directory.
pub fn resolve_root(raw: &str) -> Result<PathBuf> {
    let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if expanded.is_absolute() {
        return Ok(expanded);
    }

    let cwd = env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve current directory".to_string()))
    })?;
    Ok(absolutize(&cwd, &expanded))
}

fn absolutize(base: &Path, relative: &Path) -> PathBuf {
    if relative == Path::new(".") {
        base.to_path_buf()
    } else {
        base.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_root_is_kept() {
        let root = resolve_root("/srv/app").unwrap();
        assert_eq!(root, PathBuf::from("/srv/app"));
    }

    #[test]
    fn dot_resolves_to_base() {
        assert_eq!(absolutize(Path::new("/work"), Path::new(".")), PathBuf::from("/work"));
        assert_eq!(
            absolutize(Path::new("/work"), Path::new("web/src")),
            PathBuf::from("/work/web/src")
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn config_file_lives_under_dot_config() {
        let path = borderfix_json().unwrap();
        assert!(path.ends_with(".config/borderfix/borderfix.json"));
    }
}
