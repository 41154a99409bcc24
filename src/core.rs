//! Core listing logic for filebox.
//!
//! This module contains the non-UI pieces used by the application:
//! - [fm]: file entries, extension based classification and directory browsing (see [browse_dir], [FileEntry], [FileType]).
//! - [formatter]: the file comparator, the [Formatter] sort/filter rules, and display formatting for sizes, times and names.
//! - [version]: parsing and ordering of dot-separated version strings.
//! - [subtitle]: SubRip to WebVTT conversion.
//!
//! Everything except [browse_dir] is pure and free of I/O.

pub mod fm;
pub mod formatter;
pub mod subtitle;
pub mod version;

pub use fm::{FileEntry, FileType, browse_dir, file_extension, infer_file_type};
pub use formatter::{
    Formatter, SortKey, SortOrder, capitalize_first, compare_file, compare_file_ordering,
    format_file_type, format_modified, format_size, format_timestamp, sanitize_to_exact_width,
    sort_files,
};
pub use subtitle::srt_to_vtt;
pub use version::{Version, VersionError, compare_version};
