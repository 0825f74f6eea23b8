//! Media module for content-based type detection and input routing.

pub mod filter;
pub mod kind;

pub use filter::{
    filter_audio_paths, filter_image_paths, filter_video_paths, has_audio, has_image, has_video,
    is_audio, is_image, is_video,
};
pub use kind::{detect_media_type, MediaType};
