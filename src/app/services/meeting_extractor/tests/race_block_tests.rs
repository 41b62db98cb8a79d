//! Tests for race block parsing and metadata extraction

use super::{lines, sample_hch_program};
use crate::app::models::RaceType;
use crate::app::services::dialects::Dialect;
use crate::app::services::meeting_extractor::race_block::{
    extract_bet_types, extract_option_numbers, extract_prize_amounts, extract_prize_name,
    normalize_bet_type, parse_race_block,
};
use crate::config::ExtractorOptions;

fn options() -> ExtractorOptions {
    ExtractorOptions::default()
}

#[test]
fn test_parse_full_hch_block() {
    let dialect = Dialect::hch();
    let program = sample_hch_program();
    let block = &program[2..];

    let race = parse_race_block(&dialect, block, &options()).expect("race");
    assert_eq!(race.hora, "14:30");
    assert_eq!(race.distancia_m, "1200");
    assert_eq!(race.codigo, "123456");
    assert_eq!(race.tipo, RaceType::Handicap);
    assert_eq!(race.serie, "2");
    assert_eq!(race.condicion, "");
    assert_eq!(race.peso_categoria_kg, "56");
    assert_eq!(race.apuestas, vec!["Ganador", "Quinela"]);
    assert_eq!(race.premio_nombre, "Clasico Otoño");
    assert_eq!(race.premios.get("1o").map(String::as_str), Some("100000"));
    assert_eq!(race.premios.get("4o").map(String::as_str), Some("10000"));
    assert_eq!(race.participantes.len(), 1);
}

#[test]
fn test_block_without_header_yields_no_race() {
    let dialect = Dialect::hch();
    let block = lines(&["sin encabezado", "1 CABALLO - Sire 55"]);

    assert!(parse_race_block(&dialect, &block, &options()).is_none());
}

#[test]
fn test_header_found_behind_leading_label_line() {
    let dialect = Dialect::vsc();
    let block = lines(&[
        "Opción: 4-7-2-10",
        "15:00 aprox. 1300 Mts. (22.333) CONDICIONAL",
    ]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert_eq!(race.hora, "15:00");
    assert_eq!(race.codigo, "22333");
    assert_eq!(race.opcion, vec![4, 7, 2, 10]);
}

#[test]
fn test_serie_retained_for_handicap_only() {
    let dialect = Dialect::hch();
    let block = lines(&["16:00 aprox. 1400 Mts. (1) CLASICO 2da. Serie especial"]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert_eq!(race.tipo, RaceType::Clasico);
    assert!(race.serie.is_empty());
    // The matched ordinal is removed from the condition either way
    assert_eq!(race.condicion, "especial");
}

#[test]
fn test_plain_serie_clause_truncates_condition() {
    let dialect = Dialect::hch();
    let block = lines(&["16:00 aprox. 1400 Mts. (1) CONDICIONAL No ganadores Serie B2 interior"]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert_eq!(race.tipo, RaceType::Condicional);
    assert_eq!(race.condicion, "No ganadores");
}

#[test]
fn test_handicap_indice_clause() {
    let dialect = Dialect::hch();
    let block = lines(&["15:00 aprox. 1300 Mts. (2) HANDICAP 3ra Serie Indice: 18 al 25"]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert_eq!(race.serie, "3");
    assert_eq!(race.indice, "18 al 25");
    assert_eq!(race.condicion, "");
}

#[test]
fn test_clasico_condicional_longest_token_wins() {
    let dialect = Dialect::hch();
    let block = lines(&["17:00 aprox. 1600 Mts. (3) CLASICO CONDICIONAL machos 3 años"]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert_eq!(race.tipo, RaceType::ClasicoCondicional);
    assert_eq!(race.condicion, "machos 3 años");
}

#[test]
fn test_missing_metadata_defaults_empty() {
    let dialect = Dialect::hch();
    let block = lines(&["14:30 aprox. 1200 Mts. (111) CONDICIONAL debutantes"]);

    let race = parse_race_block(&dialect, &block, &options()).expect("race");
    assert!(race.apuestas.is_empty());
    assert!(race.premio_nombre.is_empty());
    assert!(race.premios.is_empty());
    assert!(race.opcion.is_empty());
    assert!(race.peso_categoria_kg.is_empty());
    assert!(race.participantes.is_empty());
}

#[test]
fn test_extract_bet_types_normalization() {
    let meta = "APUESTAS DISPONIBLES: GDOR; QLA-PLA, EXAC; DOBLEDEMIL";
    assert_eq!(
        extract_bet_types(meta),
        vec!["Ganador", "Quinela-Place", "Exacta", "DOBLEDEMIL"]
    );
}

#[test]
fn test_extract_bet_types_cut_before_premio() {
    let meta = "APUESTAS DISPONIBLES: GDOR; QLA PREMIO: Ensayo";
    assert_eq!(extract_bet_types(meta), vec!["Ganador", "Quinela"]);
}

#[test]
fn test_extract_bet_types_missing_clause() {
    assert!(extract_bet_types("PREMIO: Ensayo").is_empty());
}

#[test]
fn test_normalize_bet_type_ordinal_glyph() {
    assert_eq!(normalize_bet_type("a 2º").as_deref(), Some("A Segundo"));
    assert_eq!(normalize_bet_type("  trif  ").as_deref(), Some("Trifecta"));
    assert_eq!(normalize_bet_type("   "), None);
}

#[test]
fn test_extract_prize_name_truncates_at_premios() {
    let meta = "PREMIO: Gran Ensayo PREMIOS: $1.000 $500 $250 $100";
    assert_eq!(extract_prize_name(meta), "Gran Ensayo");
    assert_eq!(extract_prize_name("sin premio aqui"), "");
}

#[test]
fn test_extract_prize_amounts() {
    let meta = "PREMIOS: $1.000.000 $500.000 $250.000 $100.000";
    let premios = extract_prize_amounts(meta);
    assert_eq!(premios.get("1o").map(String::as_str), Some("1000000"));
    assert_eq!(premios.get("2o").map(String::as_str), Some("500000"));
    assert_eq!(premios.get("3o").map(String::as_str), Some("250000"));
    assert_eq!(premios.get("4o").map(String::as_str), Some("100000"));
}

#[test]
fn test_extract_prize_amounts_requires_all_four() {
    assert!(extract_prize_amounts("PREMIOS: $1.000 $500").is_empty());
    assert!(extract_prize_amounts("sin premios").is_empty());
}

#[test]
fn test_option_numbers_all_or_nothing() {
    assert_eq!(
        extract_option_numbers(["Opción: 4 - 7 - 2 - 10"]),
        vec![4, 7, 2, 10]
    );
    assert!(extract_option_numbers(["Opcion: 4 7"]).is_empty());
    assert!(extract_option_numbers(["sin etiqueta 1 2 3 4"]).is_empty());
}

#[test]
fn test_option_numbers_keep_first_four_of_longer_list() {
    assert_eq!(
        extract_option_numbers(["Opción: 4 - 7 - 2 - 10 - 3"]),
        vec![4, 7, 2, 10]
    );
}

#[test]
fn test_option_numbers_first_labelled_line_wins() {
    let lines = ["texto", "OPCION 1 2 3 4", "Opción 5 6 7 8"];
    assert_eq!(extract_option_numbers(lines), vec![1, 2, 3, 4]);
}
