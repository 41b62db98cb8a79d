//! Tests for meeting header parsing and date conversion

use super::lines;
use crate::app::services::dialects::Dialect;
use crate::app::services::meeting_extractor::header::{
    date_with_de_to_iso, date_without_de_to_iso, parse_meeting_header,
};

#[test]
fn test_parse_header_fields() {
    let dialect = Dialect::hch();
    let window = lines(&[
        "HIPODROMO CHILE",
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
    ]);

    let header = parse_meeting_header(&window, &dialect);
    assert_eq!(header.fecha, "2025-11-21");
    assert_eq!(header.nro_reunion, "12");
}

#[test]
fn test_parse_header_fails_closed() {
    let dialect = Dialect::hch();
    let window = lines(&["sin encabezado reconocible"]);

    let header = parse_meeting_header(&window, &dialect);
    assert!(header.fecha.is_empty());
    assert!(header.nro_reunion.is_empty());
}

#[test]
fn test_reunion_number_glyph_variants() {
    let dialect = Dialect::hch();
    for line in ["REUNION N° 12", "REUNION Nº 12", "REUNION No 12"] {
        let header = parse_meeting_header(&lines(&[line]), &dialect);
        assert_eq!(header.nro_reunion, "12", "failed for {line:?}");
    }
}

#[test]
fn test_date_with_de_to_iso() {
    assert_eq!(
        date_with_de_to_iso("21 de Noviembre de 2025").as_deref(),
        Some("2025-11-21")
    );
    assert_eq!(
        date_with_de_to_iso("3 de ENERO de 2026").as_deref(),
        Some("2026-01-03")
    );
}

#[test]
fn test_date_alternate_september_spelling() {
    assert_eq!(
        date_with_de_to_iso("9 de Setiembre de 2025").as_deref(),
        Some("2025-09-09")
    );
}

#[test]
fn test_date_unknown_month_is_never_guessed() {
    assert_eq!(date_with_de_to_iso("21 de Brumario de 2025"), None);
}

#[test]
fn test_date_impossible_day_fails_closed() {
    assert_eq!(date_with_de_to_iso("32 de Enero de 2025"), None);
    assert_eq!(date_with_de_to_iso("30 de Febrero de 2025"), None);
}

#[test]
fn test_date_without_de_to_iso() {
    assert_eq!(
        date_without_de_to_iso("21 NOVIEMBRE 2025").as_deref(),
        Some("2025-11-21")
    );
    assert_eq!(date_without_de_to_iso("21 de Noviembre de 2025"), None);
}
