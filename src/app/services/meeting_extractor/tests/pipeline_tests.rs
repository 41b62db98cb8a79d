//! End-to-end tests for the extraction pipeline

use super::{lines, sample_hch_program};
use crate::app::models::{RaceType, Venue};
use crate::app::services::dialects::Dialect;
use crate::app::services::meeting_extractor::{extract_meeting, MeetingExtractor};

#[test]
fn test_extract_single_race_program() {
    let program = sample_hch_program();
    let meeting = extract_meeting(&program, &Dialect::hch());

    assert_eq!(meeting.fecha, "2025-11-21");
    assert_eq!(meeting.nro_reunion, "12");
    assert_eq!(meeting.recinto, Venue::Hch);
    assert_eq!(meeting.carreras.len(), 1);

    let race = &meeting.carreras[0];
    assert_eq!(race.nro_carrera, "1");
    assert_eq!(race.hora, "14:30");
    assert_eq!(race.distancia_m, "1200");
    assert_eq!(race.codigo, "123456");
    assert_eq!(race.tipo, RaceType::Handicap);
    assert_eq!(race.serie, "2");
    assert_eq!(race.peso_categoria_kg, "56");
    assert_eq!(race.apuestas, vec!["Ganador", "Quinela"]);
    assert_eq!(race.premio_nombre, "Clasico Otoño");

    let p = &race.participantes[0];
    assert_eq!(p.numero, "1");
    assert_eq!(p.nombre, "ALAZAN");
    assert_eq!(p.jinete, "A. Perez");
    assert_eq!(p.peso, "56");
    assert_eq!(p.preparador, "J. Gomez");
    assert_eq!(p.stud, "Stud Andes");
}

#[test]
fn test_races_sorted_by_time_and_renumbered() {
    let program = lines(&[
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
        "16:00 aprox. 1400 Mts. (222) CONDICIONAL",
        "15:00 aprox. 1200 Mts. (111) CONDICIONAL",
    ]);

    let meeting = extract_meeting(&program, &Dialect::hch());
    assert_eq!(meeting.carreras.len(), 2);
    assert_eq!(meeting.carreras[0].hora, "15:00");
    assert_eq!(meeting.carreras[0].nro_carrera, "1");
    assert_eq!(meeting.carreras[0].codigo, "111");
    assert_eq!(meeting.carreras[1].hora, "16:00");
    assert_eq!(meeting.carreras[1].nro_carrera, "2");
}

#[test]
fn test_leading_participants_attach_to_first_race() {
    let program = lines(&[
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
        "1 RAYO VELOZ - Storm Cat 55",
        "J. Herrera - P. Soto",
        "16:00 aprox. 1400 Mts. (2) CONDICIONAL",
        "2 OTRO - Sire 56",
        "M. Rojas - L. Diaz",
        "15:00 aprox. 1200 Mts. (1) CONDICIONAL",
    ]);

    let extractor = MeetingExtractor::new(Dialect::hch());
    let result = extractor.extract(&program);
    let meeting = &result.meeting;

    assert_eq!(meeting.carreras.len(), 2);

    // The orphan table lands on the earliest race after the time sort
    let first = &meeting.carreras[0];
    assert_eq!(first.hora, "15:00");
    assert_eq!(first.participantes.len(), 1);
    assert_eq!(first.participantes[0].nombre, "RAYO VELOZ");
    assert_eq!(first.participantes[0].peso, "55");

    assert_eq!(meeting.carreras[1].participantes[0].nombre, "OTRO");

    assert!(result
        .stats
        .warnings
        .iter()
        .any(|w| w.contains("before the first race header")));
}

#[test]
fn test_second_meeting_blocks_ignored() {
    let program = lines(&[
        "Viernes 21 de Noviembre de 2025",
        "REUNION N° 12",
        "14:00 aprox. 1200 Mts. (1) CONDICIONAL",
        "Viernes 28 de Noviembre de 2025",
        "REUNION N° 13",
        "15:00 aprox. 1200 Mts. (2) CONDICIONAL",
    ]);

    let extractor = MeetingExtractor::new(Dialect::hch());
    let result = extractor.extract(&program);

    assert_eq!(result.stats.markers_found, 2);
    assert_eq!(result.stats.race_blocks_found, 2);
    assert_eq!(result.stats.races_parsed, 1);

    let meeting = &result.meeting;
    assert_eq!(meeting.nro_reunion, "12");
    assert_eq!(meeting.fecha, "2025-11-21");
    assert_eq!(meeting.carreras.len(), 1);
    assert_eq!(meeting.carreras[0].codigo, "1");
}

#[test]
fn test_empty_input_yields_empty_meeting() {
    let extractor = MeetingExtractor::new(Dialect::hch());
    let result = extractor.extract(&[]);

    let meeting = &result.meeting;
    assert_eq!(meeting.recinto, Venue::Hch);
    assert!(meeting.fecha.is_empty());
    assert!(meeting.nro_reunion.is_empty());
    assert!(meeting.carreras.is_empty());
    assert!(result
        .stats
        .warnings
        .iter()
        .any(|w| w.contains("No meeting date")));
}

#[test]
fn test_unrecognizable_text_yields_empty_meeting() {
    let program = lines(&["lorem ipsum", "dolor sit amet"]);
    let meeting = extract_meeting(&program, &Dialect::hch());

    assert!(meeting.carreras.is_empty());
    assert!(meeting.fecha.is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let program = sample_hch_program();
    let dialect = Dialect::hch();

    let first = extract_meeting(&program, &dialect).to_json().unwrap();
    let second = extract_meeting(&program, &dialect).to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extraction_logs_under_a_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();

    // Run a full extraction with the pipeline's log events actually consumed
    tracing::subscriber::with_default(subscriber, || {
        let meeting = extract_meeting(&sample_hch_program(), &Dialect::hch());
        assert_eq!(meeting.carreras.len(), 1);
    });
}

#[test]
fn test_stats_count_lines_and_participants() {
    let program = sample_hch_program();
    let extractor = MeetingExtractor::new(Dialect::hch());
    let result = extractor.extract(&program);

    assert_eq!(result.stats.total_lines, 8);
    assert_eq!(result.stats.markers_found, 1);
    assert_eq!(result.stats.races_parsed, 1);
    assert_eq!(result.stats.participants_parsed, 1);
    assert!(result.stats.warnings.is_empty());
}
