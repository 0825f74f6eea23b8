//! Temp directory lifecycle: create, hand off the encoded output, clean up.
//!
//! None of these operations lock. Two callers working on the same target at
//! once will race, so one worker should own a target's temp directory at a time.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::TempConfig;
use crate::error::{Error, Result};
use crate::fs::listing::{is_directory, is_file};
use crate::fs::paths::{temp_directory_path, temp_output_video_path};

/// Create the temp directory for a target, including missing parents.
///
/// Fails with [`Error::InvalidTarget`] when the target has no file name, since
/// its temp directory would be the shared temp root.
pub fn create_temp(config: &TempConfig, target_path: &Path) -> Result<()> {
    if !has_target_name(target_path) {
        return Err(Error::InvalidTarget(target_path.display().to_string()));
    }

    let temp_directory_path = temp_directory_path(config, target_path);
    fs::create_dir_all(&temp_directory_path)?;
    tracing::debug!("Temp directory ready: {}", temp_directory_path.display());
    Ok(())
}

/// Move the temporary output video to `output_path`, replacing any existing file.
///
/// Returns `false` without touching anything when no temporary output video
/// exists.
pub fn move_temp(config: &TempConfig, target_path: &Path, output_path: &Path) -> Result<bool> {
    let temp_output_video_path = temp_output_video_path(config, target_path);

    if !is_file(&temp_output_video_path) {
        tracing::debug!(
            "No temp output at {}, nothing to move",
            temp_output_video_path.display()
        );
        return Ok(false);
    }

    if is_file(output_path) {
        fs::remove_file(output_path)?;
    }

    move_file(&temp_output_video_path, output_path)?;
    tracing::info!("Moved temp output to {}", output_path.display());
    Ok(true)
}

/// Remove the temp directory for a target unless `keep_temp` is set, then
/// remove the temp root if nothing else is left in it.
///
/// Best-effort: failures are logged and otherwise ignored. Returns whether the
/// target's temp directory was removed. A target without a file name is
/// skipped, as its temp directory would be the temp root shared by every target.
pub fn clear_temp(config: &TempConfig, target_path: &Path) -> bool {
    let temp_directory_path = temp_directory_path(config, target_path);
    let mut removed = false;

    if !has_target_name(target_path) {
        tracing::debug!(
            "Target {:?} has no file name, not clearing {}",
            target_path,
            temp_directory_path.display()
        );
    } else if !config.keep_temp && is_directory(&temp_directory_path) {
        match fs::remove_dir_all(&temp_directory_path) {
            Ok(()) => {
                tracing::debug!("Removed {}", temp_directory_path.display());
                removed = true;
            }
            Err(e) => tracing::debug!(
                "Failed to remove {}: {}",
                temp_directory_path.display(),
                e
            ),
        }
    }

    let temp_root = config.temp_root();
    if is_empty_directory(&temp_root) {
        if let Err(e) = fs::remove_dir(&temp_root) {
            tracing::debug!("Failed to remove {}: {}", temp_root.display(), e);
        }
    }

    removed
}

/// Rename, falling back to copy and delete when rename is not possible
/// (for example across filesystems).
fn move_file(from: &Path, to: &Path) -> Result<()> {
    move_file_with(from, to, |from, to| fs::rename(from, to))
}

fn move_file_with<F>(from: &Path, to: &Path, rename: F) -> Result<()>
where
    F: Fn(&Path, &Path) -> io::Result<()>,
{
    if let Err(e) = rename(from, to) {
        tracing::debug!("Rename failed ({}), copying instead", e);
        fs::copy(from, to)?;
        fs::remove_file(from)?;
    }
    Ok(())
}

fn has_target_name(target_path: &Path) -> bool {
    target_path
        .file_stem()
        .is_some_and(|stem| !stem.is_empty())
}

fn is_empty_directory(path: &Path) -> bool {
    fs::read_dir(path)
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}
