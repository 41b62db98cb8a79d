//! Test utilities for the meeting extraction pipeline
//!
//! Provides the line-sequence builders shared across the component test
//! modules. Sample text follows the HCH program layout unless a test says
//! otherwise.

// Test modules
mod header_tests;
mod locator_tests;
mod pipeline_tests;
mod race_block_tests;

/// Build an owned line sequence from literals
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// The canonical single-race HCH program used by several tests
pub fn sample_hch_program() -> Vec<String> {
    lines(&[
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
        "14:30 aprox. 1200 Mts. (123.456) HANDICAP 2da. Serie Peso: 56 Kilos",
        "APUESTAS DISPONIBLES: GDOR; QLA",
        "PREMIO: Clasico Otoño PREMIOS: $100.000 $50.000 $25.000 $10.000",
        "1 ALAZAN - Thunder 56",
        "A. Perez - J. Gomez",
        "Stud Andes",
    ])
}
