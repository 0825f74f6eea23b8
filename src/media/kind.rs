//! Media type classification by file content.

use std::fmt;
use std::path::Path;

use infer::MatcherType;
use serde::Serialize;

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Unknown,
}

impl MediaType {
    /// Map an `infer` matcher category onto a media type.
    pub fn from_matcher(matcher: MatcherType) -> Self {
        match matcher {
            MatcherType::Image => MediaType::Image,
            MatcherType::Video => MediaType::Video,
            MatcherType::Audio => MediaType::Audio,
            _ => MediaType::Unknown,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image => write!(f, "image"),
            MediaType::Video => write!(f, "video"),
            MediaType::Audio => write!(f, "audio"),
            MediaType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detect the media type of a file from its leading bytes.
///
/// The extension is ignored. Unreadable paths (missing, directories, empty
/// path) classify as [`MediaType::Unknown`].
pub fn detect_media_type(path: &Path) -> MediaType {
    match infer::get_from_path(path) {
        Ok(Some(kind)) => {
            tracing::debug!("{} sniffed as {}", path.display(), kind.mime_type());
            MediaType::from_matcher(kind.matcher_type())
        }
        Ok(None) => MediaType::Unknown,
        Err(e) => {
            tracing::debug!("Cannot sniff {}: {}", path.display(), e);
            MediaType::Unknown
        }
    }
}
