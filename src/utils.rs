//! Miscellaneous utility functions for filebox.
//!
//! - [cli]: command-line parsing and help output for the `fbx` binary.
//! - [helpers]: lower-casing, config clamping, home lookup and URI path encoding.

pub mod cli;
pub mod helpers;

pub use helpers::{
    DEFAULT_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH, MIN_DISPLAY_WIDTH, build_encoded_file_path,
    clamp_display_width, encode_uri_component, get_home, same_dir, with_lowered_stack,
};
