use std::env;
use std::error::Error;

use ipt::config::IptConfig;
use ipt::{build_corpus, RawIngredientRow};
use tracing_subscriber::EnvFilter;

fn sample_rows() -> Vec<RawIngredientRow> {
    vec![
        RawIngredientRow::from_pairs([
            ("input", "1½ cups fresh basil leaves (loosely packed)"),
            ("index", "0"),
            ("name", "basil leaves"),
            ("qty", "1.5"),
            ("range_end", "0.0"),
            ("unit", "cup"),
            ("comment", "fresh, loosely packed"),
        ]),
        RawIngredientRow::from_pairs([
            ("input", "2 to 3 cloves garlic, minced"),
            ("index", "1"),
            ("name", "garlic"),
            ("qty", "2"),
            ("range_end", "3"),
            ("unit", "clove"),
            ("comment", "minced"),
        ]),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match env::args().nth(1) {
        Some(path) => IptConfig::from_file(path)?,
        None => IptConfig::default(),
    };
    let corpus = build_corpus(sample_rows(), &config.to_pipeline_config()?)?;

    print!("{corpus}");
    Ok(())
}
