//! Dialect tests
//!
//! Per-venue behavior plus venue detection and dialect lookup. Pipeline
//! behavior shared by all venues is tested with the extractor's own suite.


/// Build an owned line sequence from literals
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
