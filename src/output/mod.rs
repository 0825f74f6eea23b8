//! Output module for console output and command reports.
//!
//! Provides:
//! - Colored console output
//! - Plain-text and JSON reports

pub mod console;
pub mod report;

pub use self::console::{print_error, print_info, print_success, print_warning};
pub use report::{
    print_classification, print_paths, print_stems, print_temp_paths, Classification, TempPaths,
};
