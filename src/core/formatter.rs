//! Sorting, filtering, and display formatting for file entries in filebox.
//!
//! [compare_file] is the three-way comparator behind every listing sort.
//! The [Formatter] struct holds the sort order and filtering rules taken from
//! the filebox.toml configuration and prepares entry lists for display.
//!
//! Also holds the text helpers used to render sizes, timestamps and names.

use crate::core::FileEntry;
use crate::utils::with_lowered_stack;

use chrono::DateTime;
use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Unit labels used once a size reaches 1024 bytes.
const SIZE_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Placeholder shown for empty or unknown values.
const PLACEHOLDER: &str = "-";

/// Attribute a listing is sorted by.
///
/// Keys are matched ignoring case and surrounding whitespace, the same way for
/// the config file and the command line. Unrecognized keys map to
/// [SortKey::Unsorted], which keeps the original order.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String")]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Type,
    Unsorted,
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        with_lowered_stack(s.trim(), |key| match key {
            "name" => SortKey::Name,
            "size" => SortKey::Size,
            "type" => SortKey::Type,
            _ => SortKey::Unsorted,
        })
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::from(s.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Type => "type",
            SortKey::Unsorted => "unsorted",
        })
    }
}

/// Desired ordering of a listing.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SortOrder {
    pub key: SortKey,
    pub asc: bool,
}

impl SortOrder {
    pub fn new(key: SortKey, asc: bool) -> Self {
        Self { key, asc }
    }

    /// Same key, opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            key: self.key,
            asc: !self.asc,
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder {
            key: SortKey::Name,
            asc: true,
        }
    }
}

fn sign(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Signed `a - b`, saturating at the i64 bounds in both directions.
fn size_difference(a: u64, b: u64) -> i64 {
    let max = i64::MAX as u64;
    if a >= b {
        (a - b).min(max) as i64
    } else {
        -((b - a).min(max) as i64)
    }
}

fn upper_chars(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_uppercase)
}

/// Three-way comparison of two entries.
///
/// Negative puts `a` before `b`, positive after, zero keeps them equal.
/// Names compare case-insensitively, sizes by difference, types by
/// [FileType](crate::core::FileType) declaration order. A descending order negates the result.
pub fn compare_file(a: &FileEntry, b: &FileEntry, order: SortOrder) -> i64 {
    let result = match order.key {
        SortKey::Name => sign(upper_chars(a.filename()).cmp(upper_chars(b.filename()))),
        SortKey::Size => size_difference(a.size(), b.size()),
        SortKey::Type => sign(a.file_type().cmp(&b.file_type())),
        SortKey::Unsorted => 0,
    };

    if order.asc { result } else { -result }
}

/// [compare_file] as an [Ordering], for use with `sort_by`.
pub fn compare_file_ordering(a: &FileEntry, b: &FileEntry, order: SortOrder) -> Ordering {
    compare_file(a, b, order).cmp(&0)
}

/// Stable sort of the entries by the given order.
pub fn sort_files(entries: &mut [FileEntry], order: SortOrder) {
    entries.sort_by(|a, b| compare_file_ordering(a, b, order));
}

/// Formatter struct to handle sorting and filtering of file entries
/// based on user preferences.
#[derive(Debug, Clone)]
pub struct Formatter {
    order: SortOrder,
    dirs_first: bool,
    show_hidden: bool,
}

impl Formatter {
    pub fn new(order: SortOrder, dirs_first: bool, show_hidden: bool) -> Self {
        Self {
            order,
            dirs_first,
            show_hidden,
        }
    }

    #[inline]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Sorts the given file entries in place according to the formatter's settings.
    ///
    /// With `dirs_first` directories are grouped ahead of files regardless of direction.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| {
            if self.dirs_first {
                match (a.is_dir(), b.is_dir()) {
                    (true, false) => return Ordering::Less,
                    (false, true) => return Ordering::Greater,
                    _ => {}
                }
            }
            compare_file_ordering(a, b, self.order)
        });
    }

    /// Filters the given file entries in place according to the formatter's settings,
    /// then sorts them.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        entries.retain(|e| self.show_hidden || !e.is_hidden());
        self.sort_entries(entries);
    }
}

/// Formats a size in bytes for display.
///
/// Sizes of zero or less give "-", sizes under 1024 are shown in bytes,
/// anything larger is shown with one decimal in the largest fitting unit up to "YB".
///
/// # Examples
/// format_size(1536) = "1.5 kB"
pub fn format_size(size: impl Into<i128>) -> String {
    let size: i128 = size.into();
    if size <= 0 {
        return PLACEHOLDER.to_string();
    }
    if size < 1024 {
        return format!("{} B", size);
    }

    let mut value = size as f64;
    let mut unit = 0;
    loop {
        value /= 1024.0;
        if round_one_decimal(value) >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
            unit += 1;
        } else {
            break;
        }
    }

    // Round half up before printing, float formatting alone rounds ties to even.
    format!("{:.1} {}", round_one_decimal(value), SIZE_UNITS[unit])
}

#[inline]
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a timestamp in milliseconds since the Unix epoch as "YYYY-MM-DD HH:MM" (UTC).
/// # Returns
/// The formatted timestamp or "-" if it is out of range.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Formats an optional modification time, "-" when unknown.
pub fn format_modified(millis: Option<i64>) -> String {
    millis
        .map(format_timestamp)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Formats the [FileType](crate::core::FileType) of an entry, "Directory" for directories.
pub fn format_file_type(entry: &FileEntry) -> &'static str {
    if entry.is_dir() {
        "Directory"
    } else {
        entry.file_type().label()
    }
}

/// Upper-cases the first character of the input.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tab stops are this many columns apart.
const TAB_STOP: usize = 4;

/// Fits a string to exactly `width` display columns.
///
/// Control characters are dropped and tabs advance to the next tab stop.
/// Text that does not fit is cut at the last whole character, anything shorter
/// is padded with spaces. Wide glyphs count as two columns.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    for ch in line.chars().filter(|&ch| ch == '\t' || !ch.is_control()) {
        let (piece, cols) = match ch {
            '\t' => (None, TAB_STOP - used % TAB_STOP),
            _ => (Some(ch), ch.width().unwrap_or(0)),
        };
        if used + cols > width {
            break;
        }
        match piece {
            Some(ch) => out.push(ch),
            None => out.extend(std::iter::repeat_n(' ', cols)),
        }
        used += cols;
    }

    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
