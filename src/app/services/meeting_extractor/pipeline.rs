//! Extraction pipeline orchestration
//!
//! Wires the locator, header parser, segmenter and block parsers together
//! for one document. The pipeline is generic over the venue: every
//! venue-specific decision is delegated to the [`Dialect`] it was built
//! with, and the finalization step (time sort, renumbering, leading-block
//! reattachment) is shared by all venues.

use tracing::{debug, info, warn};

use super::header::parse_meeting_header;
use super::locator::{find_meeting_markers, meeting_bounds};
use super::participant::gather_participant_chunks;
use super::segmenter::split_race_blocks;
use super::stats::{ExtractionResult, ExtractionStats};
use crate::app::models::{Meeting, Participant, Race};
use crate::app::services::dialects::Dialect;
use crate::config::ExtractorOptions;

/// Race-meeting extractor for one venue dialect
///
/// The extractor is stateless across calls: each extraction owns its own
/// line buffer view and produces an independent meeting tree, so one
/// extractor may serve concurrent callers without coordination.
#[derive(Debug, Clone)]
pub struct MeetingExtractor {
    dialect: Dialect,
    options: ExtractorOptions,
}

impl MeetingExtractor {
    /// Create an extractor with default scan limits
    pub fn new(dialect: Dialect) -> Self {
        Self::with_options(dialect, ExtractorOptions::default())
    }

    /// Create an extractor with explicit scan limits
    pub fn with_options(dialect: Dialect, options: ExtractorOptions) -> Self {
        Self { dialect, options }
    }

    /// Extract the first meeting from a line sequence, with statistics
    ///
    /// Total over its input: malformed blocks and chunks are recovered
    /// locally, and a document with no recognizable content yields an empty
    /// meeting rather than an error.
    pub fn extract(&self, lines: &[String]) -> ExtractionResult {
        let dialect = &self.dialect;
        let mut stats = ExtractionStats::new();
        stats.total_lines = lines.len();

        let markers = find_meeting_markers(lines, dialect.date_re);
        stats.markers_found = markers.len();
        let (start, end) = meeting_bounds(&markers, lines.len());
        debug!("Meeting bounds: lines {}..{}", start, end);

        let window_start = start.saturating_sub(self.options.header_lookback);
        let window_end = (end + self.options.header_lookahead).min(lines.len());
        let header = parse_meeting_header(&lines[window_start..window_end], dialect);
        if header.fecha.is_empty() {
            stats.add_warning("No meeting date recognized".to_string());
        }

        let segmented = split_race_blocks(lines, dialect);
        stats.race_blocks_found = segmented.races.len();

        // A participant table printed before the first detected race header
        // belongs to race #1; it is attached after the sort below.
        let mut first_race_participants: Vec<Participant> = Vec::new();
        if let Some(leading) = segmented.leading {
            first_race_participants =
                self.parse_orphan_participants(leading.lines(lines), &mut stats);
        }

        let mut carreras: Vec<Race> = Vec::new();
        for block in &segmented.races {
            // Blocks belonging to a second meeting in the same document are
            // out of range and ignored
            if block.start >= end {
                continue;
            }
            match (dialect.parse_race_block)(dialect, block.lines(lines), &self.options) {
                Some(race) => carreras.push(race),
                None => {
                    stats.blocks_skipped += 1;
                    warn!("Race block at line {} has no parsable header", block.start);
                }
            }
        }

        carreras.sort_by_key(|race| time_sort_key(&race.hora));

        if !first_race_participants.is_empty() {
            if let Some(first) = carreras.first_mut() {
                debug!(
                    "Attaching {} leading participants to race 1",
                    first_race_participants.len()
                );
                first.participantes = first_race_participants;
            }
        }

        for (idx, race) in carreras.iter_mut().enumerate() {
            race.nro_carrera = (idx + 1).to_string();
        }

        stats.races_parsed = carreras.len();
        stats.participants_parsed = carreras.iter().map(|r| r.participantes.len()).sum();
        info!(
            "Extracted {} races ({} participants) from {} lines",
            stats.races_parsed, stats.participants_parsed, stats.total_lines
        );

        let meeting = Meeting {
            nro_reunion: header.nro_reunion,
            fecha: header.fecha,
            recinto: dialect.venue,
            carreras,
        };

        ExtractionResult { meeting, stats }
    }

    /// Mine the leading block for participant chunks
    fn parse_orphan_participants(
        &self,
        lines: &[String],
        stats: &mut ExtractionStats,
    ) -> Vec<Participant> {
        let chunks = gather_participant_chunks(&self.dialect, lines, &self.options);
        let participants: Vec<Participant> = chunks
            .iter()
            .filter_map(|chunk| (self.dialect.parse_participant_chunk)(chunk))
            .collect();

        if !participants.is_empty() {
            stats.add_warning(format!(
                "{} participants found before the first race header",
                participants.len()
            ));
        }
        participants
    }
}

/// Convenience wrapper: extract one meeting with default options
pub fn extract_meeting(lines: &[String], dialect: &Dialect) -> Meeting {
    MeetingExtractor::new(*dialect).extract(lines).meeting
}

/// Sort key for "HH:MM" times
///
/// Races with an unparsable time keep their document order at the end of
/// the card rather than poisoning the sort.
fn time_sort_key(hora: &str) -> u32 {
    let Some((hours, minutes)) = hora.split_once(':') else {
        return u32::MAX;
    };
    match (hours.trim().parse::<u32>(), minutes.trim().parse::<u32>()) {
        (Ok(h), Ok(m)) => h * 60 + m,
        _ => u32::MAX,
    }
}
