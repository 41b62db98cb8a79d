//! Meeting marker location
//!
//! Finds the weekday-plus-date markers that delimit a meeting inside the
//! line sequence. A document may contain more than one meeting; the first
//! marker opens the meeting processed downstream and the second (when
//! present) closes it.

use regex::Regex;

/// One occurrence of the meeting-date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingMarker {
    /// Index of the matching line
    pub line: usize,

    /// Matched date text, empty for a synthesized marker
    pub text: String,
}

/// Scan the line sequence for meeting-date markers
///
/// When no line matches, a single marker is synthesized at index 0 with
/// empty text so the rest of the pipeline degrades gracefully instead of
/// failing on a document without a recognizable date.
pub fn find_meeting_markers(lines: &[String], date_re: &Regex) -> Vec<MeetingMarker> {
    let mut markers: Vec<MeetingMarker> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            date_re.find(line).map(|m| MeetingMarker {
                line: idx,
                text: m.as_str().to_string(),
            })
        })
        .collect();

    if markers.is_empty() {
        markers.push(MeetingMarker {
            line: 0,
            text: String::new(),
        });
    }

    markers
}

/// Compute the half-open line range of the first meeting
///
/// The first marker opens the meeting; the second marker (if any) closes it,
/// otherwise the meeting runs to the end of the document.
pub fn meeting_bounds(markers: &[MeetingMarker], line_count: usize) -> (usize, usize) {
    let start = markers.first().map(|m| m.line).unwrap_or(0);
    let end = markers.get(1).map(|m| m.line).unwrap_or(line_count);
    (start, end)
}
