//! Plain-text rendering of a file listing for filebox.
//!
//! Each entry becomes one fixed-width line: name, type, size and, when enabled,
//! the modification time. Names are fitted with [sanitize_to_exact_width] so
//! control characters and wide glyphs never break the columns.

use crate::config::Display;
use crate::core::{
    FileEntry, format_file_type, format_modified, format_size, sanitize_to_exact_width,
};

const TYPE_WIDTH: usize = 9;
const SIZE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 16;
const GAP: &str = "  ";
// Narrowest name column, the time column is dropped before going below it
pub(crate) const MIN_NAME_WIDTH: usize = 8;
// Type and size columns with their gaps
pub(crate) const BASE_COLUMNS: usize = 2 * GAP.len() + TYPE_WIDTH + SIZE_WIDTH;
const TIME_COLUMN: usize = GAP.len() + TIME_WIDTH;

/// Whether the time column is enabled and fits next to a minimal name column.
fn shows_time(display: &Display) -> bool {
    display.timestamps() && display.width() >= MIN_NAME_WIDTH + BASE_COLUMNS + TIME_COLUMN
}

fn name_width(display: &Display) -> usize {
    let mut fixed = BASE_COLUMNS;
    if shows_time(display) {
        fixed += TIME_COLUMN;
    }
    display
        .width()
        .saturating_sub(fixed)
        .max(MIN_NAME_WIDTH)
}

/// Renders one line of the listing.
pub fn render_entry(entry: &FileEntry, display: &Display) -> String {
    let name = if entry.is_dir() {
        format!("{}/", entry.filename())
    } else {
        entry.filename().to_string()
    };
    let size = if entry.is_dir() {
        format_size(0)
    } else {
        format_size(entry.size())
    };

    let mut line = sanitize_to_exact_width(&name, name_width(display));
    line.push_str(GAP);
    line.push_str(&format!("{:<TYPE_WIDTH$}", format_file_type(entry)));
    line.push_str(GAP);
    line.push_str(&format!("{:>SIZE_WIDTH$}", size));
    if shows_time(display) {
        line.push_str(GAP);
        line.push_str(&format!("{:<TIME_WIDTH$}", format_modified(entry.modified())));
    }
    line
}

/// Renders a listing, one line per entry, in the given order.
/// # Returns
/// The listing lines, or a single notice for an empty directory.
pub fn render_listing(entries: &[FileEntry], display: &Display) -> Vec<String> {
    if entries.is_empty() {
        return vec![sanitize_to_exact_width(
            "[empty directory]",
            display.width(),
        )];
    }
    entries
        .iter()
        .map(|entry| render_entry(entry, display))
        .collect()
}
