//! SubRip (.srt) to WebVTT (.vtt) conversion.
//!
//! Browsers only play WebVTT tracks, so SubRip files are converted before use.
//! The conversion is line based and does not validate cue timings.

use std::borrow::Cow;

const VTT_HEADER: &str = "WEBVTT\n\n";
const TIMING_ARROW: &str = "-->";

/// A line holding only a cue index, e.g. "12".
fn is_sequence_index(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit())
}

fn convert_line(line: &str) -> Option<Cow<'_, str>> {
    if is_sequence_index(line) {
        None
    } else if line.contains(TIMING_ARROW) {
        Some(Cow::Owned(line.replace(',', ".")))
    } else {
        Some(Cow::Borrowed(line))
    }
}

/// Converts SubRip text into WebVTT.
///
/// Cue index lines are dropped, commas in timing lines become periods,
/// and every other line is kept as is. Each output line ends with "\n".
pub fn srt_to_vtt(input: &str) -> String {
    let mut output = String::with_capacity(VTT_HEADER.len() + input.len());
    output.push_str(VTT_HEADER);

    for line in input.lines().filter_map(convert_line) {
        output.push_str(&line);
        output.push('\n');
    }

    output
}
