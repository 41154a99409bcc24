//! Helpers for filebox.
//!
//! This module defines the display width limits used by the config and provides:
//! - Allocation-free lower-casing of short strings for table lookups
//! - Home directory lookup
//! - URI component encoding of listing paths
//! - Directory path comparison
//!
//! These helpers are used throughout filebox.

use tracing::warn;

use std::path::PathBuf;

/// The narrowest listing allowed by the config: type and size columns plus an 8 column name.
pub const MIN_DISPLAY_WIDTH: usize = 31;
/// The default listing width. Can be overwritten in the filebox.toml.
pub const DEFAULT_DISPLAY_WIDTH: usize = 80;
/// The widest listing allowed by the config.
pub const MAX_DISPLAY_WIDTH: usize = 400;

// Longest string lowered on the stack
const LOWER_STACK_LEN: usize = 32;

/// Calls `f` with the ASCII lower-cased form of `s`.
///
/// Short ASCII strings are lowered in a stack buffer, anything else falls back
/// to a full unicode lower-casing on the heap.
pub fn with_lowered_stack<R>(s: &str, f: impl FnOnce(&str) -> R) -> R {
    if s.len() <= LOWER_STACK_LEN && s.is_ascii() {
        let mut buf = [0u8; LOWER_STACK_LEN];
        let lowered = &mut buf[..s.len()];
        lowered.copy_from_slice(s.as_bytes());
        lowered.make_ascii_lowercase();
        if let Ok(lowered) = std::str::from_utf8(lowered) {
            return f(lowered);
        }
    }
    f(&s.to_lowercase())
}

/// Safely clamp the display width.
pub fn clamp_display_width(value: usize) -> usize {
    let clamped = value.clamp(MIN_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH);
    if clamped != value {
        warn!(
            "display width={} out of range ({}..={}), clamped to {}",
            value, MIN_DISPLAY_WIDTH, MAX_DISPLAY_WIDTH, clamped
        );
    }
    clamped
}

/// Returns the user's home directory.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Percent-encodes a string as a single URI component.
///
/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is encoded as UTF-8 bytes in upper-case hex.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0F) as usize] as char);
            }
        }
    }
    out
}

/// Joins directory segments and a filename into a path and encodes it as one URI component.
///
/// A leading "/" is dropped so the path is always relative to the listing root.
///
/// # Examples
/// build_encoded_file_path(&["music", "live"], "a b.mp3") = "music%2Flive%2Fa%20b.mp3"
pub fn build_encoded_file_path<S: AsRef<str>>(dirs: &[S], filename: &str) -> String {
    let dir = join_segments(dirs);
    let path = if dir.is_empty() {
        filename.to_string()
    } else {
        format!("{}/{}", dir, filename)
    };
    let path = path.strip_prefix('/').unwrap_or(&path);
    encode_uri_component(path)
}

/// True when both directory segment lists point at the same path.
pub fn same_dir<A: AsRef<str>, B: AsRef<str>>(a: &[A], b: &[B]) -> bool {
    join_segments(a) == join_segments(b)
}

fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowered_stack_and_heap() {
        assert_eq!(with_lowered_stack("JPEG", str::to_string), "jpeg");
        assert_eq!(with_lowered_stack("ÉTÉ", str::to_string), "été");
        let long = "A".repeat(LOWER_STACK_LEN + 1);
        assert_eq!(with_lowered_stack(&long, |s| s.len()), LOWER_STACK_LEN + 1);
    }

    #[test]
    fn clamp_width() {
        assert_eq!(clamp_display_width(0), MIN_DISPLAY_WIDTH);
        assert_eq!(clamp_display_width(120), 120);
        assert_eq!(clamp_display_width(usize::MAX), MAX_DISPLAY_WIDTH);
    }

    #[test]
    fn uri_component_encoding() {
        assert_eq!(encode_uri_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_uri_component("it's(1)!~*"), "it's(1)!~*");
        assert_eq!(encode_uri_component("é?&="), "%C3%A9%3F%26%3D");
    }

    #[test]
    fn encoded_file_paths() {
        assert_eq!(
            build_encoded_file_path(&["music", "live"], "a b.mp3"),
            "music%2Flive%2Fa%20b.mp3"
        );
        let root: [&str; 0] = [];
        assert_eq!(build_encoded_file_path(&root, "x.txt"), "x.txt");
        assert_eq!(build_encoded_file_path(&["", "docs"], "x.txt"), "docs%2Fx.txt");
    }

    #[test]
    fn directory_comparison() {
        assert!(same_dir(&["a", "b"], &[String::from("a"), String::from("b")]));
        assert!(!same_dir(&["a", "b"], &["a"]));
        assert!(!same_dir(&["a/b"], &["a", "c"]));
    }
}
