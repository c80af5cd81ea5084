//! Matcher behavior through the public API.

use pharmadex::allergy::{AllergyGroupTable, ScreenResult, screen_allergy};
use pharmadex::analysis::normalizer::{bidirectional_contains, normalize_for_match};
use pharmadex::analysis::synonym::SynonymTable;
use pharmadex::interaction::{
    InteractionMatcher, InteractionScan, InteractionTable, find_interactions,
};
use pharmadex::label::projector::{
    DETAIL_MAX_CHARS, ELLIPSIS, NO_INFORMATION, project_detail, project_summary,
};
use pharmadex::label::query::parse_label_response;
use pharmadex::label::record::LabelRecord;
use pharmadex::pill::{Color, PillCatalog, PillQuery, PillRecord, Shape, filter_pills};
use pharmadex::tables::Tables;

fn aspirin_table() -> InteractionTable {
    let mut table = InteractionTable::new();
    table.insert("aspirin", &["warfarin"]);
    table
}

fn penicillin_groups() -> AllergyGroupTable {
    let mut groups = AllergyGroupTable::new();
    groups.insert("페니실린", &["아목시실린", "penicillin"]);
    groups
}

fn round_white_catalog() -> PillCatalog {
    let rows = [
        ("Acetaminophen 500mg", "acetaminophen", "500mg", Shape::Round, Color::White, "L484"),
        ("Aspirin 100mg", "aspirin", "100mg", Shape::Round, Color::White, "BAYER"),
        ("Ibuprofen 200mg", "ibuprofen", "200mg", Shape::Round, Color::Brown, "I-2"),
    ];
    PillCatalog::new(
        rows.into_iter()
            .map(|(name, ingredient, strength, shape, color, imprint)| {
                PillRecord::new(name, ingredient, strength, shape, color, imprint)
            })
            .collect(),
    )
}

#[test]
fn test_normalize_for_match_is_idempotent() {
    for input in ["Amoxicillin 500 mg", "  ASPIRIN\tProtect ", "아목시실린 500mg", "", "   "] {
        let once = normalize_for_match(input);
        assert_eq!(normalize_for_match(&once), once, "input {input:?}");
    }
}

#[test]
fn test_bidirectional_contains_either_order() {
    assert!(bidirectional_contains("Warfarin", "warfarin 5 mg"));
    assert!(bidirectional_contains("warfarin 5 mg", "Warfarin"));
    assert!(!bidirectional_contains("warfarin", "aspirin"));
    assert!(!bidirectional_contains("", "aspirin"));
}

#[test]
fn test_search_terms_never_empty() {
    let synonyms = SynonymTable::from_pairs([
        ("타이레놀", "acetaminophen"),
        ("진통제", "acetaminophen ibuprofen"),
    ]);
    for query in ["타이레놀", "  진통제 ", "Advil", "\"quoted\"", "x"] {
        assert!(!synonyms.resolve_search_terms(query).is_empty(), "query {query:?}");
    }
    assert_eq!(synonyms.resolve_search_terms("진통제"), ["acetaminophen", "ibuprofen"]);
    assert_eq!(synonyms.resolve_search_terms("  Advil "), ["advil"]);
}

#[test]
fn test_interaction_single_finding_for_pair() {
    let table = aspirin_table();
    let findings = find_interactions(&["Aspirin", "Warfarin"], &table);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].first, "Aspirin");
    assert_eq!(findings[0].second, "Warfarin");

    assert!(find_interactions(&["Metformin", "Vitamin C"], &table).is_empty());
}

#[test]
fn test_interaction_no_duplicates_when_entries_overlap() {
    let mut table = aspirin_table();
    table.insert("warfarin", &["aspirin"]);
    table.insert("aspirin protect", &["warfarin"]);

    let findings = find_interactions(&["Aspirin Protect", "Warfarin"], &table);
    assert_eq!(findings.len(), 1);
}

#[test]
fn test_interaction_symmetric_by_default() {
    let table = aspirin_table();
    let reversed = find_interactions(&["Warfarin", "Aspirin"], &table);
    assert_eq!(reversed.len(), 1);

    let directed = InteractionMatcher::new(&table)
        .with_scan(InteractionScan::KeyToPartner)
        .find_interactions(&["Warfarin", "Aspirin"]);
    assert!(directed.is_empty());
}

#[test]
fn test_allergy_group_match() {
    let result = screen_allergy(&["아목시실린500mg"], "페니실린", &penicillin_groups());
    match result {
        ScreenResult::GroupMatch {
            group_label,
            matched_medications,
        } => {
            assert_eq!(group_label, "페니실린");
            assert_eq!(matched_medications, ["아목시실린500mg"]);
        }
        other => panic!("Expected GroupMatch, got {other:?}"),
    }
}

#[test]
fn test_allergy_no_match() {
    let result = screen_allergy(&["Metformin", "Lisinopril"], "latex", &penicillin_groups());
    assert_eq!(result, ScreenResult::NoMatch);
}

#[test]
fn test_allergy_name_fragment_match() {
    let medications = ["Ibuprofen 200mg", "Metformin"];
    let result = screen_allergy(&medications, "ibuprofen", &penicillin_groups());
    assert!(matches!(result, ScreenResult::NameFragmentMatch { .. }));
    assert_eq!(result.matched_medications(), ["Ibuprofen 200mg"]);
}

#[test]
fn test_pill_imprint_substring() {
    let catalog = PillCatalog::new(vec![PillRecord::new(
        "Acetaminophen 500mg",
        "acetaminophen",
        "500mg",
        Shape::Round,
        Color::White,
        "L484",
    )]);

    let matches = filter_pills(catalog.records(), &PillQuery::new().with_imprint("484"));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].imprint, "L484");

    let oval = filter_pills(catalog.records(), &PillQuery::new().with_shape(Shape::Oval));
    assert!(oval.is_empty());
}

#[test]
fn test_pill_order_preserved() {
    let catalog = round_white_catalog();
    let query = PillQuery::new().with_shape(Shape::Round).with_color(Color::White);
    let names: Vec<&str> = filter_pills(catalog.records(), &query)
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Acetaminophen 500mg", "Aspirin 100mg"]);
}

#[test]
fn test_pill_refilter_is_identity() {
    let catalog = round_white_catalog();
    let query = PillQuery::new().with_shape(Shape::Round);
    let once = filter_pills(catalog.records(), &query);
    let twice = filter_pills(once.iter().copied(), &query);
    assert_eq!(once, twice);
}

#[test]
fn test_detail_fallback_chain() {
    let json = r#"{"purpose": ["Pain reliever"], "openfda": {"brand_name": ["Tylenol"]}}"#;
    let record: LabelRecord = serde_json::from_str(json).unwrap();
    let detail = project_detail(&record);
    assert_eq!(detail.section("효능·효과").unwrap().text, "Pain reliever");

    let empty = project_detail(&LabelRecord::default());
    assert_eq!(empty.section("효능·효과").unwrap().text, NO_INFORMATION);
}

#[test]
fn test_malformed_record_beside_valid_one() {
    let body = r#"{"results": [
        {"openfda": {"brand_name": ["Tylenol"], "generic_name": ["acetaminophen"]},
         "purpose": ["Pain reliever"], "warnings": ["Liver warning"]},
        {"openfda": null, "purpose": null, "indications_and_usage": 12, "warnings": {}}
    ]}"#;
    let records = parse_label_response(body).unwrap();
    assert_eq!(records.len(), 2);

    let valid = project_detail(&records[0]);
    assert_eq!(valid.brand_name, "Tylenol");
    assert_eq!(valid.section("효능·효과").unwrap().text, "Pain reliever");
    assert_eq!(valid.section("주의사항").unwrap().text, "Liver warning");

    let broken = project_detail(&records[1]);
    assert_eq!(broken.section("효능·효과").unwrap().text, NO_INFORMATION);
    assert_eq!(broken.section("주의사항").unwrap().text, NO_INFORMATION);
    assert_eq!(project_summary(&records[1]).purpose, None);
}

#[test]
fn test_detail_truncation() {
    let long = LabelRecord {
        warnings: vec!["가".repeat(2000)],
        ..Default::default()
    };
    let section = project_detail(&long).section("주의사항").cloned().unwrap();
    assert!(section.truncated);
    assert_eq!(section.text.chars().count(), DETAIL_MAX_CHARS + ELLIPSIS.chars().count());
    assert!(section.text.ends_with(ELLIPSIS));

    let short_text = "a".repeat(1400);
    let short = LabelRecord {
        warnings: vec![short_text.clone()],
        ..Default::default()
    };
    let section = project_detail(&short).section("주의사항").cloned().unwrap();
    assert!(!section.truncated);
    assert_eq!(section.text, short_text);
}

#[test]
fn test_builtin_tables_are_populated() {
    let tables = Tables::builtin();
    assert!(!tables.synonyms.is_empty());
    assert!(!tables.interactions.is_empty());
    assert!(!tables.allergy_groups.is_empty());
    assert!(!tables.pills.is_empty());

    let l484 = tables.pills.filter(&PillQuery::new().with_imprint("L484"));
    assert!(l484.iter().any(|p| p.name == "Acetaminophen 500mg"));
}
