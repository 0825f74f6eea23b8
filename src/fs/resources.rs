//! Locating bundled resources next to the installed binary.

use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Resolve `path` against the directory of the running executable.
///
/// The working directory is never consulted.
pub fn resolve_relative_path(path: &Path) -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let install_dir = exe.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Executable has no parent directory: {}", exe.display()),
        )
    })?;
    Ok(resolve_relative_to(install_dir, path))
}

/// Join `path` onto `base` and normalise `.` and `..` lexically.
///
/// An absolute `path` replaces `base`. Symlinks are not resolved.
pub fn resolve_relative_to(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                let at_name = matches!(last, Some(Component::Normal(_)));
                // `..` at the root stays at the root
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));

                if at_name {
                    normalized.pop();
                } else if !at_root {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_to() {
        let base = Path::new("/opt/facefusion/bin");
        assert_eq!(
            resolve_relative_to(base, Path::new("../models/face.onnx")),
            PathBuf::from("/opt/facefusion/models/face.onnx")
        );
        assert_eq!(
            resolve_relative_to(base, Path::new("./assets/./font.ttf")),
            PathBuf::from("/opt/facefusion/bin/assets/font.ttf")
        );
        assert_eq!(
            resolve_relative_to(base, Path::new("/etc/models")),
            PathBuf::from("/etc/models")
        );
        assert_eq!(
            resolve_relative_to(Path::new("/"), Path::new("../../x")),
            PathBuf::from("/x")
        );
    }

    #[test]
    fn test_resolve_relative_path_is_absolute() {
        let resolved = resolve_relative_path(Path::new("../assets")).unwrap();
        assert!(resolved.is_absolute());
        assert!(!resolved.components().any(|c| c == Component::ParentDir));

        let install_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(
            resolve_relative_path(Path::new("assets")).unwrap(),
            resolve_relative_to(&install_dir, Path::new("assets"))
        );
    }
}
