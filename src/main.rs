//! facefusion-fs - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use facefusion_fs::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::{
        clear_temp, create_temp, list_directory, move_temp, temp_directory_path,
        temp_frame_paths, temp_frames_pattern, temp_output_video_path,
    },
    media::{detect_media_type, has_audio, has_image},
    output::{
        print_classification, print_error, print_info, print_paths, print_stems,
        print_success, print_temp_paths, print_warning, Classification, TempPaths,
    },
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Io(_) | Error::InvalidTarget(_) => {
                    ExitCode::from(exit_codes::IO_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration
    let mut config = match Config::load_if_exists(&args.config)? {
        Some(config) => config,
        None => {
            print_warning(&format!(
                "Configuration file not found: {}, using defaults",
                args.config.display()
            ));
            Config::default()
        }
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let temp = &config.temp;
    let json = args.json;

    match &args.command {
        Command::Paths { target } => {
            let paths = TempPaths {
                temp_directory: temp_directory_path(temp, target),
                frames_pattern: temp_frames_pattern(temp, target, "*"),
                output_video: temp_output_video_path(temp, target),
            };
            print_temp_paths(&paths, json)?;
        }
        Command::CreateTemp { target } => {
            create_temp(temp, target)?;
            print_success(&format!(
                "Temp directory ready: {}",
                temp_directory_path(temp, target).display()
            ));
        }
        Command::MoveTemp { target, output } => {
            if move_temp(temp, target, output)? {
                print_success(&format!("Moved temp output to {}", output.display()));
            } else {
                print_warning(&format!(
                    "No temp output at {}, nothing moved",
                    temp_output_video_path(temp, target).display()
                ));
            }
        }
        Command::ClearTemp { target } => {
            let temp_directory = temp_directory_path(temp, target);
            if clear_temp(temp, target) {
                print_success(&format!("Removed {}", temp_directory.display()));
            } else if temp.keep_temp {
                print_info("keep_temp is set, temp directory left in place");
            } else {
                print_info(&format!("Nothing removed at {}", temp_directory.display()));
            }
        }
        Command::Frames { target } => {
            let frames = temp_frame_paths(temp, target)?;
            print_paths(&frames, json)?;
        }
        Command::Classify { paths } => {
            let entries: Vec<Classification> = paths
                .iter()
                .map(|path| Classification {
                    path: path.clone(),
                    media_type: detect_media_type(path),
                })
                .collect();
            print_classification(&entries, json)?;

            if !json {
                print_info(&format!(
                    "Has audio: {}, has image: {}",
                    has_audio(paths),
                    has_image(paths)
                ));
            }
        }
        Command::List { directory } => match list_directory(directory)? {
            Some(stems) => print_stems(directory, &stems, json)?,
            None => print_warning(&format!("Not a directory: {}", directory.display())),
        },
    }

    Ok(())
}
