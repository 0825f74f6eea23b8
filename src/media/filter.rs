//! Predicates and filters for routing inputs by media type.

use std::path::{Path, PathBuf};

use crate::fs::is_file;
use crate::media::kind::{detect_media_type, MediaType};

/// Check that `path` is an existing file whose content is audio.
pub fn is_audio(path: &Path) -> bool {
    is_file(path) && detect_media_type(path) == MediaType::Audio
}

/// Check that the content at `path` is an image.
///
/// Unlike [`is_audio`] and [`is_video`] there is no separate `is_file` check;
/// a path that cannot be read simply does not sniff as an image.
pub fn is_image(path: &Path) -> bool {
    detect_media_type(path) == MediaType::Image
}

/// Check that `path` is an existing file whose content is video.
pub fn is_video(path: &Path) -> bool {
    is_file(path) && detect_media_type(path) == MediaType::Video
}

/// True if at least one path is audio.
pub fn has_audio<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().any(|path| is_audio(path.as_ref()))
}

/// True if at least one path is an image.
pub fn has_image<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().any(|path| is_image(path.as_ref()))
}

/// True if at least one path is video.
pub fn has_video<P: AsRef<Path>>(paths: &[P]) -> bool {
    paths.iter().any(|path| is_video(path.as_ref()))
}

/// Keep the audio paths, in their original order.
pub fn filter_audio_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    filter_paths(paths, is_audio)
}

/// Keep the image paths, in their original order.
pub fn filter_image_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    filter_paths(paths, is_image)
}

/// Keep the video paths, in their original order.
pub fn filter_video_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    filter_paths(paths, is_video)
}

fn filter_paths<P: AsRef<Path>>(paths: &[P], keep: fn(&Path) -> bool) -> Vec<PathBuf> {
    paths
        .iter()
        .filter_map(|path| {
            let path: &Path = path.as_ref();
            keep(path).then(|| path.to_path_buf())
        })
        .collect()
}
