//! CLI module for argument parsing.

pub mod args;

pub use args::{Args, Command};
