//! Result reporting for the CLI commands.

use std::path::{Path, PathBuf};

use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::media::MediaType;

/// Temp locations derived for one target.
#[derive(Debug, Serialize)]
pub struct TempPaths {
    pub temp_directory: PathBuf,
    pub frames_pattern: PathBuf,
    pub output_video: PathBuf,
}

/// Sniffed type of one input path.
#[derive(Debug, Serialize)]
pub struct Classification {
    pub path: PathBuf,
    pub media_type: MediaType,
}

/// Print the temp locations for a target.
pub fn print_temp_paths(paths: &TempPaths, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(paths)?);
        return Ok(());
    }

    println!("  Temp directory: {}", paths.temp_directory.display());
    println!("  Frames pattern: {}", paths.frames_pattern.display());
    println!("  Output video:   {}", paths.output_video.display());
    Ok(())
}

/// Print one path per line.
pub fn print_paths(paths: &[PathBuf], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(paths)?);
        return Ok(());
    }

    for path in paths {
        println!("{}", path.display());
    }
    println!("{}", style(format!("{} file(s)", paths.len())).dim());
    Ok(())
}

/// Print directory entry stems.
pub fn print_stems(directory: &Path, stems: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stems)?);
        return Ok(());
    }

    println!("{}", style(format!("{}:", directory.display())).bold());
    for stem in stems {
        println!("  {}", stem);
    }
    Ok(())
}

/// Print the media type of each path and a routing summary.
pub fn print_classification(entries: &[Classification], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    for entry in entries {
        let label = match entry.media_type {
            MediaType::Unknown => style(entry.media_type.to_string()).dim(),
            _ => style(entry.media_type.to_string()).green(),
        };
        println!("  {:<8} {}", label, entry.path.display());
    }

    let count = |media_type: MediaType| {
        entries
            .iter()
            .filter(|entry| entry.media_type == media_type)
            .count()
    };
    println!(
        "Audio: {}, images: {}, videos: {}",
        style(count(MediaType::Audio)).green(),
        style(count(MediaType::Image)).green(),
        style(count(MediaType::Video)).green()
    );
    Ok(())
}
