//! Library crate for filebox.
//!
//! The listing core lives in [core]: file classification, the file comparator,
//! size/time formatting, version comparison and SubRip to WebVTT conversion.
//! The `fbx` binary (`src/main.rs`) wires it to the filesystem through
//! [config], [ui] and [utils].

pub mod config;
pub mod core;
pub mod ui;
pub mod utils;
