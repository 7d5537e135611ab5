#![forbid(unsafe_code)]
use shiftroster::catalog::parse_catalog_line;
use shiftroster::{parse_catalog, parse_people, CatalogError, ShiftKind, DEFAULT_CATALOG};

#[test]
fn default_catalog_parses_in_order() {
    let catalog = parse_catalog(DEFAULT_CATALOG).unwrap();
    let names: Vec<_> = catalog.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Early Morning (07:00-16:00)",
            "Morning (09:00-18:00)",
            "General (10:00-19:00)",
            "Kit Kat (10:00-14:00 & 19:00-23:00)",
        ]
    );
    let kit_kat = catalog.get("Kit Kat (10:00-14:00 & 19:00-23:00)").unwrap();
    assert_eq!(kit_kat.timing, "10:00-14:00 & 19:00-23:00");
    assert_eq!(kit_kat.headcount, 3);
    assert_eq!(kit_kat.kind, ShiftKind::Wfh);
    assert_eq!(
        catalog.wfh_names().collect::<Vec<_>>(),
        ["Early Morning (07:00-16:00)", "Kit Kat (10:00-14:00 & 19:00-23:00)"]
    );
}

#[test]
fn fields_are_trimmed_and_type_is_case_insensitive() {
    let shift = parse_catalog_line("  Night|22:00-06:00 |  2 | wfo ").unwrap();
    assert_eq!(shift.name, "Night (22:00-06:00)");
    assert_eq!(shift.headcount, 2);
    assert_eq!(shift.kind, ShiftKind::Wfo);
}

#[test]
fn single_bad_line_is_reported() {
    let err = parse_catalog("Morning | 09:00-18:00 | x | WFO").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"1 malformed line(s): line 1: 'Morning | 09:00-18:00 | x | WFO': invalid headcount 'x'");
}

#[test]
fn every_bad_line_is_collected() {
    let text = "Early | 07:00-16:00 | 1 | WFH\n\
                Broken line\n\
                \n\
                Late | 14:00-23:00 | 0 | WFO\n\
                Remote | 10:00-18:00 | 2 | Hybrid\n\
                Early | 07:00-16:00 | 2 | WFO\n\
                Minus | 10:00-18:00 | -1 | WFO";
    let err = parse_catalog(text).unwrap_err();
    let lines: Vec<usize> = err.lines().iter().map(|e| e.line_no).collect();
    assert_eq!(lines, [2, 4, 5, 6, 7]);

    let reasons: Vec<&str> = err.lines().iter().map(|e| e.reason.as_str()).collect();
    assert!(reasons[0].starts_with("expected 4 fields"));
    assert_eq!(reasons[1], "headcount must be > 0");
    assert!(reasons[2].contains("unknown shift type"));
    assert_eq!(reasons[3], "duplicate shift name: Early (07:00-16:00)");
    assert_eq!(reasons[4], "invalid headcount '-1'");
}

#[test]
fn empty_catalog_is_an_error() {
    assert!(matches!(parse_catalog("\n  \n"), Err(CatalogError::Empty)));
}

#[test]
fn people_are_trimmed_and_deduplicated() {
    let people = parse_people(" alice, bob,,alice\ncarol ,\n ");
    let names: Vec<_> = people.iter().map(|p| p.as_str()).collect();
    assert_eq!(names, ["alice", "bob", "carol"]);
}

#[test]
fn catalog_deserialization_rejects_duplicates() {
    let json = r#"[
        {"name": "A", "timing": "9-17", "hc": 1, "type": "WFO"},
        {"name": "A", "timing": "9-17", "hc": 2, "type": "WFH"}
    ]"#;
    let res: Result<shiftroster::ShiftCatalog, _> = serde_json::from_str(json);
    assert!(res.is_err());
}

#[test]
fn catalog_deserialization_rejects_blank_names() {
    let json = r#"[{"name": "  ", "timing": "9-17", "hc": 1, "type": "WFO"}]"#;
    let res: Result<shiftroster::ShiftCatalog, _> = serde_json::from_str(json);
    let err = res.unwrap_err();
    assert!(err.to_string().contains("shift name cannot be empty"));
}
