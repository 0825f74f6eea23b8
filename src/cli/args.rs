//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Temp-space and media-type helper CLI.
#[derive(Parser, Debug)]
#[command(
    name = "facefusion-fs",
    version,
    about = "Manage frame-extraction temp space and classify media inputs",
    long_about = "Derives and manages the per-target temp directories used while extracting \
                  and re-encoding video frames, and classifies input files as audio, image \
                  or video by their content."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "facefusion.toml", global = true)]
    pub config: PathBuf,

    /// Extension of extracted frame images (e.g. png, jpg).
    #[arg(long, env = "FACEFUSION_TEMP_FRAME_FORMAT", global = true)]
    pub temp_frame_format: Option<String>,

    /// Base directory for temp space (defaults to the OS temp directory).
    #[arg(long, env = "FACEFUSION_TEMP_DIRECTORY", global = true)]
    pub temp_directory: Option<PathBuf>,

    /// Keep temp directories when clearing.
    #[arg(long, global = true)]
    pub keep_temp: bool,

    /// Qualify temp directory names with a hash of the full target path.
    #[arg(long, global = true)]
    pub qualify_by_path_hash: bool,

    /// Print list output as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the temp directory, frame pattern and temp output path for a target.
    Paths {
        /// Target video or image.
        target: PathBuf,
    },
    /// Create the temp directory for a target.
    CreateTemp {
        /// Target video or image.
        target: PathBuf,
    },
    /// Move the temp output video of a target to its final location.
    MoveTemp {
        /// Target video or image.
        target: PathBuf,
        /// Final output path (overwritten if it exists).
        output: PathBuf,
    },
    /// Remove the temp directory of a target.
    ClearTemp {
        /// Target video or image.
        target: PathBuf,
    },
    /// List extracted frame files of a target.
    Frames {
        /// Target video or image.
        target: PathBuf,
    },
    /// Classify files as audio, image or video by content.
    Classify {
        /// Files to inspect.
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },
    /// List entry names of a directory without extensions.
    List {
        /// Directory to list.
        directory: PathBuf,
    },
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(format) = &self.temp_frame_format {
            config.temp.temp_frame_format = format.clone();
        }

        if let Some(dir) = &self.temp_directory {
            config.temp.temp_directory = Some(dir.clone());
        }

        // Boolean flags (only override if set to non-default)
        if self.keep_temp {
            config.temp.keep_temp = true;
        }

        if self.qualify_by_path_hash {
            config.temp.qualify_by_path_hash = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand() {
        let args = Args::parse_from(["facefusion-fs", "move-temp", "in.mp4", "out.mp4"]);
        match args.command {
            Command::MoveTemp { target, output } => {
                assert_eq!(target, PathBuf::from("in.mp4"));
                assert_eq!(output, PathBuf::from("out.mp4"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.config, PathBuf::from("facefusion.toml"));
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::parse_from([
            "facefusion-fs",
            "frames",
            "clip.mp4",
            "--temp-frame-format",
            "jpg",
            "--temp-directory",
            "/scratch",
            "--keep-temp",
        ]);

        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.temp.temp_frame_format, "jpg");
        assert_eq!(config.temp.temp_directory, Some(PathBuf::from("/scratch")));
        assert!(config.temp.keep_temp);
        assert!(!config.temp.qualify_by_path_hash);
    }

    #[test]
    fn test_flags_do_not_reset_config() {
        let args = Args::parse_from(["facefusion-fs", "paths", "clip.mp4"]);
        let mut config = Config::default();
        config.temp.keep_temp = true;
        config.temp.temp_frame_format = "bmp".to_string();

        args.merge_into_config(&mut config);
        assert!(config.temp.keep_temp);
        assert_eq!(config.temp.temp_frame_format, "bmp");
    }
}
