//! Tests for meeting marker location

use super::lines;
use crate::app::services::dialects::Dialect;
use crate::app::services::meeting_extractor::locator::{find_meeting_markers, meeting_bounds};

#[test]
fn test_single_marker_found() {
    let dialect = Dialect::hch();
    let input = lines(&[
        "HIPODROMO CHILE",
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
    ]);

    let markers = find_meeting_markers(&input, dialect.date_re);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].line, 1);
    assert_eq!(markers[0].text, "Viernes 21 de Noviembre de 2025");
}

#[test]
fn test_marker_inside_longer_line() {
    let dialect = Dialect::hch();
    let input = lines(&["Programa Oficial - Sabado 6 de Diciembre de 2025 - Volante"]);

    let markers = find_meeting_markers(&input, dialect.date_re);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].text, "Sabado 6 de Diciembre de 2025");
}

#[test]
fn test_no_marker_synthesizes_one_at_zero() {
    let dialect = Dialect::hch();
    let input = lines(&["sin fecha aqui", "tampoco aqui"]);

    let markers = find_meeting_markers(&input, dialect.date_re);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].line, 0);
    assert!(markers[0].text.is_empty());
}

#[test]
fn test_two_markers_delimit_first_meeting() {
    let dialect = Dialect::hch();
    let input = lines(&[
        "Viernes 21 de Noviembre de 2025",
        "cuerpo de la reunion",
        "Viernes 28 de Noviembre de 2025",
        "otra reunion",
    ]);

    let markers = find_meeting_markers(&input, dialect.date_re);
    assert_eq!(markers.len(), 2);

    let (start, end) = meeting_bounds(&markers, input.len());
    assert_eq!(start, 0);
    assert_eq!(end, 2);
}

#[test]
fn test_bounds_without_second_marker_run_to_document_end() {
    let dialect = Dialect::hch();
    let input = lines(&["x", "Domingo 1 de Marzo de 2026", "y", "z"]);

    let markers = find_meeting_markers(&input, dialect.date_re);
    let (start, end) = meeting_bounds(&markers, input.len());
    assert_eq!(start, 1);
    assert_eq!(end, 4);
}
