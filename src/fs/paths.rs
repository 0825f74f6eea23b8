//! Temp path derivation.
//!
//! Everything here is pure string composition over paths: nothing touches the
//! filesystem except [`temp_frame_paths`], which globs the temp directory.

use std::path::{Path, PathBuf};

use md5::{Digest, Md5};

use crate::config::TempConfig;
use crate::error::Result;
use crate::fs::pattern::matching_paths;

/// File name of the in-progress encode inside a temp directory.
pub const TEMP_OUTPUT_VIDEO_NAME: &str = "temp.mp4";

/// Number of hex characters of the path digest used to qualify temp directory names.
const PATH_DIGEST_LEN: usize = 8;

/// Get the sorted list of extracted frame files for a target.
pub fn temp_frame_paths(config: &TempConfig, target_path: &Path) -> Result<Vec<PathBuf>> {
    let temp_frames_pattern = temp_frames_pattern(config, target_path, "*");
    matching_paths(&temp_frames_pattern)
}

/// Build `<temp dir>/<prefix>.<frame format>`.
///
/// The prefix is inserted verbatim, so it may be a glob wildcard or an
/// encoder sequence template such as `%04d`.
pub fn temp_frames_pattern(config: &TempConfig, target_path: &Path, prefix: &str) -> PathBuf {
    temp_directory_path(config, target_path)
        .join(format!("{}.{}", prefix, config.temp_frame_format))
}

/// Get the temp directory for a target: the temp root joined with the target's
/// file name minus its extension.
pub fn temp_directory_path(config: &TempConfig, target_path: &Path) -> PathBuf {
    let target_name = target_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let folder_name = if config.qualify_by_path_hash {
        format!("{}-{}", target_name, path_digest(target_path))
    } else {
        target_name
    };

    config.temp_root().join(folder_name)
}

/// Get the path of the temporary output video for a target.
pub fn temp_output_video_path(config: &TempConfig, target_path: &Path) -> PathBuf {
    temp_directory_path(config, target_path).join(TEMP_OUTPUT_VIDEO_NAME)
}

/// Short MD5 digest of the target path as given (no canonicalisation).
fn path_digest(target_path: &Path) -> String {
    let digest = Md5::digest(target_path.to_string_lossy().as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(PATH_DIGEST_LEN);
    hex
}
