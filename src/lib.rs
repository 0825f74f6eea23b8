//! facefusion-fs - filesystem helpers for frame-based video processing
//!
//! This library manages the scratch space a face-processing pipeline uses while
//! extracting and re-encoding video frames, and routes input files by their
//! content-sniffed media type.
//!
//! # Features
//!
//! - Deterministic per-target temp directories under `<temp base>/facefusion`
//! - Frame file globbing in sorted order
//! - Temp lifecycle: create, move the encoded output, best-effort cleanup
//! - Audio/image/video detection from file headers
//! - Directory listing that tells "missing" apart from "empty"
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use facefusion_fs::{fs, TempConfig};
//!
//! fn main() -> facefusion_fs::Result<()> {
//!     let config = TempConfig::default();
//!     let target = Path::new("/videos/clip.mp4");
//!
//!     fs::create_temp(&config, target)?;
//!     // ... extract frames into fs::temp_frames_pattern(&config, target, "%04d")
//!     let frames = fs::temp_frame_paths(&config, target)?;
//!     println!("{} frames", frames.len());
//!
//!     fs::move_temp(&config, target, Path::new("/videos/clip-out.mp4"))?;
//!     fs::clear_temp(&config, target);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use config::{Config, TempConfig};
pub use error::{Error, Result};
pub use media::MediaType;
