//! Meeting extraction pipeline for race-program text
//!
//! This module turns the ordered line sequence of a race-program document
//! into a structured [`Meeting`](crate::app::models::Meeting). The pipeline
//! is shared by every venue; all venue-specific patterns and heuristics are
//! injected through a [`Dialect`](crate::app::services::dialects::Dialect).
//!
//! ## Architecture
//!
//! The extractor is organized into logical components:
//! - [`locator`] - Meeting-date marker location and meeting bounds
//! - [`header`] - Meeting number and ISO date extraction
//! - [`segmenter`] - Race block segmentation with boundary adjustment
//! - [`race_block`] - Race header reduction and metadata extraction
//! - [`participant`] - Participant chunk segmentation and layout heuristics
//! - [`fields`] - Field normalization utilities
//! - [`pipeline`] - Orchestration, finalization and statistics
//! - [`stats`] - Extraction statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use volante_extractor::{Dialect, extract_meeting};
//!
//! let lines: Vec<String> = vec![
//!     "Viernes 21 de Noviembre de 2025".to_string(),
//!     "REUNION N° 12".to_string(),
//! ];
//! let meeting = extract_meeting(&lines, &Dialect::hch());
//! assert_eq!(meeting.fecha, "2025-11-21");
//! ```

pub mod fields;
pub mod header;
pub mod locator;
pub mod participant;
pub mod pipeline;
pub mod race_block;
pub mod segmenter;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::MeetingHeader;
pub use locator::MeetingMarker;
pub use pipeline::{MeetingExtractor, extract_meeting};
pub use segmenter::{Block, SegmentedDocument};
pub use stats::{ExtractionResult, ExtractionStats};
