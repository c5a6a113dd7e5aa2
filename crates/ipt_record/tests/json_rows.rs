use ipt_record::{ingest_row, FieldValue, RawIngredientRow, RecordConfig, RecordError};

const ROWS: &str = r#"[
  {"index": "0", "input": "1 1/2 cups sugar", "name": "sugar", "qty": "1.5", "range_end": "0", "unit": "cup", "comment": ""},
  {"index": "1", "input": "2 to 3 cloves garlic", "name": "garlic", "qty": "2", "range_end": "3", "unit": "clove", "comment": ""},
  {"index": "2", "input": "Salt", "name": "Salt", "qty": "", "range_end": "", "unit": "", "comment": ""}
]"#;

#[test]
fn ingest_json_fixture_rows() {
    let rows: Vec<RawIngredientRow> = serde_json::from_str(ROWS).expect("fixture parses");
    let cfg = RecordConfig::default();

    let ingested: Vec<_> = rows
        .into_iter()
        .map(|raw| ingest_row(raw, &cfg))
        .collect::<Result<_, RecordError>>()
        .expect("all fixture rows ingest");

    assert_eq!(ingested.len(), 3);
    assert_eq!(ingested[0].display, "1 1/2 cups sugar");
    assert_eq!(
        ingested[0].record.qty.as_number().map(|d| d.to_string()),
        Some("1.5".to_string())
    );
    assert_eq!(
        ingested[1].record.range_end.as_number().map(|d| d.to_string()),
        Some("3".to_string())
    );
    assert_eq!(ingested[2].record.name, FieldValue::Text("Salt".into()));
    assert!(ingested[2].record.qty.is_absent());
}

#[test]
fn fixture_row_without_comment_column_fails() {
    let raw: RawIngredientRow = serde_json::from_str(
        r#"{"index": "0", "input": "1 egg", "name": "egg", "qty": "1", "range_end": "0", "unit": ""}"#,
    )
    .expect("fixture parses");

    let err = ingest_row(raw, &RecordConfig::default()).expect_err("comment column is required");
    assert_eq!(err, RecordError::MissingField("comment"));
    assert_eq!(err.to_string(), "row is missing required column `comment`");
}
