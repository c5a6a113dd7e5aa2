use std::error::Error;

use ipt::{
    build_corpus, translate_row, NumericError, PipelineConfig, PipelineError, RawIngredientRow,
    RecordConfig, RecordError, TaggerConfig, TaggerError,
};

fn row(input: &str, qty: &str) -> RawIngredientRow {
    RawIngredientRow::from_pairs([
        ("input", input),
        ("index", "0"),
        ("name", "sugar"),
        ("qty", qty),
        ("range_end", ""),
        ("unit", "cup"),
        ("comment", ""),
    ])
}

fn run(raw: RawIngredientRow) -> Result<String, PipelineError> {
    translate_row(raw, &RecordConfig::default(), &TaggerConfig::default())
}

#[test]
fn missing_column_returns_record_error() {
    let mut raw = row("1 cup sugar", "1");
    raw.columns.remove("range_end");

    let result = run(raw);
    assert!(matches!(
        result,
        Err(PipelineError::Record(RecordError::MissingField("range_end")))
    ));
}

#[test]
fn missing_display_column_returns_record_error() {
    let mut raw = row("1 cup sugar", "1");
    raw.columns.remove("input");

    let result = run(raw);
    assert!(matches!(
        result,
        Err(PipelineError::Record(RecordError::MissingField("input")))
    ));
}

#[test]
fn non_decimal_quantity_is_rejected() {
    let result = run(row("one cup sugar", "one"));
    assert_eq!(
        result,
        Err(PipelineError::Record(RecordError::InvalidNumber {
            column: "qty",
            value: "one".into(),
        }))
    );
}

#[test]
fn zero_denominator_in_display_bubbles_up() {
    let err = run(row("5/0 cup sugar", "1")).expect_err("malformed fraction fails");
    assert_eq!(
        err,
        PipelineError::Tagger(TaggerError::Numeric {
            token: "5/0".into(),
            source: NumericError::ZeroDenominator("5/0".into()),
        })
    );

    let tagger_err = err.source().expect("pipeline error has a source");
    assert!(tagger_err.source().is_some(), "numeric cause is chained");
}

#[test]
fn invalid_tagger_config_bubbles_up() {
    let cfg = TaggerConfig {
        field_order: Vec::new(),
        ..TaggerConfig::default()
    };
    let result = translate_row(row("1 cup sugar", "1"), &RecordConfig::default(), &cfg);
    assert!(matches!(
        result,
        Err(PipelineError::Tagger(TaggerError::InvalidConfig(_)))
    ));
}

#[test]
fn invalid_record_config_bubbles_up() {
    let cfg = RecordConfig {
        version: 0,
        ..RecordConfig::default()
    };
    let result = translate_row(row("1 cup sugar", "1"), &cfg, &TaggerConfig::default());
    assert!(matches!(
        result,
        Err(PipelineError::Record(RecordError::InvalidConfig(_)))
    ));
}

#[test]
fn first_failing_row_aborts_corpus() {
    let rows = vec![
        row("1 cup sugar", "1"),
        row("2 cups sugar", "two"),
        row("3 cups sugar", "3"),
    ];

    for use_parallel in [false, true] {
        let cfg = PipelineConfig {
            use_parallel,
            ..PipelineConfig::default()
        };
        let result = build_corpus(rows.clone(), &cfg);
        assert!(
            matches!(
                result,
                Err(PipelineError::Record(RecordError::InvalidNumber { column: "qty", .. }))
            ),
            "parallel={use_parallel}"
        );
    }
}

#[test]
fn unmatched_tokens_are_not_errors() {
    let out = run(row("a pinch of something unusual", "")).expect("no error for OTHER tokens");
    assert!(out.lines().all(|line| line.ends_with("\tOTHER")));
}
