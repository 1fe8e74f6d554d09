//! vCard line folding (RFC 6350 §3.2).
//!
//! Lines are folded only between extended grapheme clusters, so neither a
//! UTF-8 sequence nor a user-perceived character is ever split.

use unicode_segmentation::UnicodeSegmentation;
use vcardline_core::config::LineEnding;
use vcardline_core::constants::MAX_LINE_OCTETS;

/// Splits a logical line into physical line contents.
///
/// Every segment after the first is meant to be written after a single
/// SPACE, and that space counts toward the segment's `max_octets` budget. A
/// grapheme cluster longer than the budget is kept whole on its own line.
#[must_use]
pub fn split_physical(line: &str, max_octets: usize) -> Vec<&str> {
    let mut segments = Vec::with_capacity(line.len() / max_octets.max(1) + 1);
    let mut start = 0;
    let mut octets = 0;

    for (offset, grapheme) in line.grapheme_indices(true) {
        if octets + grapheme.len() > max_octets && offset > start {
            segments.push(&line[start..offset]);
            start = offset;
            octets = 1; // The continuation space
        }
        octets += grapheme.len();
    }

    segments.push(&line[start..]);
    segments
}

/// Folds a line to at most `max_octets` octets per physical line, joining
/// physical lines with `line_ending` followed by a space.
///
/// No terminator is appended after the last physical line.
#[must_use]
pub fn fold_line_with(line: &str, max_octets: usize, line_ending: LineEnding) -> String {
    if line.len() <= max_octets {
        return line.to_string();
    }

    let ending = line_ending.as_str();
    let segments = split_physical(line, max_octets);
    let mut result = String::with_capacity(line.len() + segments.len() * (ending.len() + 1));

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            result.push_str(ending);
            result.push(' ');
        }
        result.push_str(segment);
    }

    result
}

/// Folds a line to 75 octets per physical line with CRLF breaks.
#[must_use]
pub fn fold_line(line: &str) -> String {
    fold_line_with(line, MAX_LINE_OCTETS, LineEnding::Crlf)
}
