use ipt::{build_corpus, translate_row, PipelineConfig, RawIngredientRow, RecordConfig, TaggerConfig};

const ROWS_JSON: &str = include_str!("fixtures/rows.json");

fn fixture_rows() -> Vec<RawIngredientRow> {
    serde_json::from_str(ROWS_JSON).expect("fixture rows parse")
}

#[test]
fn translation_is_repeatable() {
    let record_cfg = RecordConfig::default();
    let tagger_cfg = TaggerConfig::default();

    for raw in fixture_rows() {
        let first = translate_row(raw.clone(), &record_cfg, &tagger_cfg).expect("first run");
        let second = translate_row(raw, &record_cfg, &tagger_cfg).expect("second run");
        assert_eq!(first, second);
    }
}

#[test]
fn corpus_is_stable_across_runs_and_modes() {
    let baseline = build_corpus(fixture_rows(), &PipelineConfig::default()).expect("baseline");

    for _ in 0..5 {
        let cfg = PipelineConfig {
            use_parallel: true,
            ..PipelineConfig::default()
        };
        let again = build_corpus(fixture_rows(), &cfg).expect("parallel run");
        assert_eq!(baseline, again);
    }
}

#[test]
fn column_order_in_source_does_not_matter() {
    let forward = RawIngredientRow::from_pairs([
        ("input", "2 cups flour"),
        ("index", "0"),
        ("name", "flour"),
        ("qty", "2"),
        ("range_end", ""),
        ("unit", "cup"),
        ("comment", ""),
    ]);
    let reversed = RawIngredientRow::from_pairs([
        ("comment", ""),
        ("unit", "cup"),
        ("range_end", ""),
        ("qty", "2"),
        ("name", "flour"),
        ("index", "0"),
        ("input", "2 cups flour"),
    ]);

    let record_cfg = RecordConfig::default();
    let tagger_cfg = TaggerConfig::default();
    assert_eq!(
        translate_row(forward, &record_cfg, &tagger_cfg).expect("forward"),
        translate_row(reversed, &record_cfg, &tagger_cfg).expect("reversed"),
    );
}
