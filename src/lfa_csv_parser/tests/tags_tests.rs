//! Tests for metadata tag dispatch

use super::super::builder::RecordBuilder;
use super::super::tags::{METADATA_TAGS, apply_metadata, matching_tags};
use crate::Error;

#[test]
fn test_tag_evaluation_order() {
    let markers: Vec<_> = METADATA_TAGS.iter().map(|tag| tag.marker).collect();
    assert_eq!(
        markers,
        vec![
            "#Material",
            "#Instrument",
            "#Thickness_RT/mm",
            "#Diameter/mm",
            "#Date",
            "#Atmosphere",
            "#Gas_flow/(ml/min)",
        ]
    );
}

#[test]
fn test_tags_match_by_substring() {
    let fields: Vec<_> = matching_tags("  #Material name").map(|tag| tag.field).collect();
    assert_eq!(fields, vec!["chemical_formula"]);

    assert_eq!(matching_tags("Material").count(), 0);
    assert_eq!(matching_tags("#Shot").count(), 0);
    assert_eq!(matching_tags("#Time/min").count(), 0);
}

#[test]
fn test_every_matching_tag_fires() {
    let mut builder = RecordBuilder::new();
    let applied = apply_metadata(&["#Material #Date", "X"], 1, &mut builder).unwrap();

    assert_eq!(applied, 2);
    assert_eq!(builder.chemical_formula.as_deref(), Some("X"));
    assert_eq!(builder.date.as_deref(), Some("X"));
}

#[test]
fn test_string_values_are_trimmed() {
    let mut builder = RecordBuilder::new();
    apply_metadata(&["#Material", "  Fe2O3 "], 1, &mut builder).unwrap();
    apply_metadata(&["#Date", " 2020-01-01\t"], 2, &mut builder).unwrap();
    apply_metadata(&["#Atmosphere", " Argon "], 3, &mut builder).unwrap();

    assert_eq!(builder.chemical_formula.as_deref(), Some("Fe2O3"));
    assert_eq!(builder.date.as_deref(), Some("2020-01-01"));
    assert_eq!(builder.atmosphere.as_deref(), Some("Argon"));
}

#[test]
fn test_scalar_values_are_not_trimmed() {
    let mut builder = RecordBuilder::new();
    apply_metadata(&["#Thickness_RT/mm", " 2.0 "], 1, &mut builder).unwrap();
    apply_metadata(&["#Diameter/mm", "12.5 "], 2, &mut builder).unwrap();
    apply_metadata(&["#Gas_flow/(ml/min)", " 50"], 3, &mut builder).unwrap();

    assert_eq!(builder.thickness.as_deref(), Some(" 2.0 "));
    assert_eq!(builder.diameter.as_deref(), Some("12.5 "));
    assert_eq!(builder.gas_flow.as_deref(), Some(" 50"));
}

#[test]
fn test_instrument_strips_markers() {
    let mut builder = RecordBuilder::new();
    apply_metadata(&["#Instrument", "#LFA#457 "], 1, &mut builder).unwrap();

    assert_eq!(builder.instrument.as_deref(), Some("LFA457 "));
}

#[test]
fn test_later_tag_row_overwrites_value() {
    let mut builder = RecordBuilder::new();
    apply_metadata(&["#Material", "Fe2O3"], 1, &mut builder).unwrap();
    apply_metadata(&["#Material", "Al2O3"], 2, &mut builder).unwrap();

    assert_eq!(builder.chemical_formula.as_deref(), Some("Al2O3"));
}

#[test]
fn test_tag_without_value_field() {
    let mut builder = RecordBuilder::new();
    let result = apply_metadata(&["#Material"], 3, &mut builder);

    assert!(matches!(
        result,
        Err(Error::IndexOutOfRange {
            row: 3,
            index: 1,
            len: 1
        })
    ));
    assert_eq!(builder, RecordBuilder::new());
}

#[test]
fn test_untagged_row_is_ignored() {
    let mut builder = RecordBuilder::new();
    let applied = apply_metadata(&["25.0", "1.2"], 1, &mut builder).unwrap();

    assert_eq!(applied, 0);
    assert_eq!(builder, RecordBuilder::new());
}
