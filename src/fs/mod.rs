//! Filesystem module.
//!
//! Provides:
//! - Temp path derivation and frame globbing
//! - Temp directory lifecycle (create, move output, clear)
//! - Existence checks and directory listing
//! - Resource path resolution

pub mod listing;
pub mod paths;
pub mod pattern;
pub mod resources;
pub mod temp;

pub use listing::{is_directory, is_file, list_directory};
pub use paths::{
    temp_directory_path, temp_frame_paths, temp_frames_pattern, temp_output_video_path,
    TEMP_OUTPUT_VIDEO_NAME,
};
pub use pattern::{matching_paths, FilePattern};
pub use resources::{resolve_relative_path, resolve_relative_to};
pub use temp::{clear_temp, create_temp, move_temp};
