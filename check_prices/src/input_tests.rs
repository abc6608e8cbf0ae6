//! Tests for input list parsing.

use market_common::{ItemMappings, MarketKind, MarketRegistry};

use super::{parse_input, split_hq};
use crate::error::Error;

fn mappings() -> ItemMappings {
    vec![
        ("Iron Ore".to_string(), 5111),
        ("Iron Ingot".to_string(), 5057),
        ("Eisenerz".to_string(), 5111),
        ("Shared Name".to_string(), 30),
        ("Shared Name".to_string(), 10),
    ]
    .into_iter()
    .collect()
}

fn registry() -> MarketRegistry {
    vec![
        ("Gilgamesh".to_string(), MarketKind::World),
        ("Aether".to_string(), MarketKind::Dc),
    ]
    .into_iter()
    .collect()
}

fn parse(text: &str) -> crate::Result<Vec<crate::ItemRecord>> {
    parse_input(text, "list.csv", &mappings(), &registry())
}

#[test]
fn split_hq_recognises_both_markers() {
    assert_eq!(split_hq("Iron Ingot[HQ]"), ("Iron Ingot", true));
    assert_eq!(split_hq("Iron Ingot\u{e03c}"), ("Iron Ingot", true));
    assert_eq!(split_hq("Iron Ingot"), ("Iron Ingot", false));
}

#[test]
fn parses_rows_into_records() {
    let items = parse("Iron Ore,3,gilgamesh\nIron Ingot[HQ],0,AETHER\n").unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_id, 5111);
    assert_eq!(items[0].want_quantity, 3);
    assert_eq!(items[0].market, "Gilgamesh");
    assert!(!items[0].hq);

    assert_eq!(items[1].item_id, 5057);
    assert_eq!(items[1].name, "Iron Ingot");
    assert!(items[1].hq);
    assert_eq!(items[1].market, "Aether");
    assert!(items[1].is_sell());
}

#[test]
fn one_record_per_mapped_id_in_ascending_order() {
    let items = parse("Shared Name,1,Aether").unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.item_id).collect();
    assert_eq!(ids, vec![10, 30]);
}

#[test]
fn skips_rows_with_empty_name_and_strips_bom() {
    let items = parse("\u{feff}Iron Ore,1,Aether\n,5,Aether\n\nIron Ingot,2,Aether\n").unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn unknown_item_reports_line_and_is_case_sensitive() {
    let err = parse("Iron Ore,1,Aether\niron ore,1,Aether\n").unwrap_err();

    match &err {
        Error::UnknownItem { file, line, name } => {
            assert_eq!(file, "list.csv");
            assert_eq!(*line, 2);
            assert_eq!(name, "iron ore");
        }
        other => panic!("Expected Error::UnknownItem, got: {other:?}"),
    }
    assert!(err.to_string().contains("Item names are case sensitive"));
}

#[test]
fn non_integer_quantity_is_rejected() {
    for bad in ["three", "-1", "1.5", ""] {
        let text = format!("Iron Ore,{bad},Aether");
        match parse(&text) {
            Err(Error::InvalidQuantity { line, value, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(value, bad);
            }
            other => panic!("Expected Error::InvalidQuantity for {bad:?}, got: {other:?}"),
        }
    }
}

#[test]
fn unknown_market_is_rejected() {
    let err = parse("Iron Ore,1,Atlantis").unwrap_err();
    match err {
        Error::UnknownMarket { market, line, .. } => {
            assert_eq!(market, "Atlantis");
            assert_eq!(line, 1);
        }
        other => panic!("Expected Error::UnknownMarket, got: {other:?}"),
    }
}

#[test]
fn missing_columns_are_empty() {
    // No market column at all
    assert!(matches!(
        parse("Iron Ore,1"),
        Err(Error::UnknownMarket { .. })
    ));
}

#[test]
fn read_input_file_uses_path_in_errors() {
    use std::io::Write;

    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    write!(tmp, "Nothing,1,Aether").unwrap();

    let err = super::read_input_file(tmp.path(), &mappings(), &registry()).unwrap_err();
    assert!(err
        .to_string()
        .starts_with(&format!("{}: Line 1:", tmp.path().display())));
}
