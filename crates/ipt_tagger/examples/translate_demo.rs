use ipt_record::{Field, FieldValue, IngredientRecord};
use ipt_tagger::{translate_record, TaggerConfig, TaggerError};
use rust_decimal::Decimal;

fn main() -> Result<(), TaggerError> {
    let record = IngredientRecord::default()
        .with(Field::Qty, FieldValue::Number(Decimal::new(15, 1)))
        .with(Field::Unit, FieldValue::Text("cup".into()))
        .with(Field::Name, FieldValue::Text("basil".into()))
        .with(
            Field::Comment,
            FieldValue::Text("fresh basil leaves, loosely packed".into()),
        );

    let translated = translate_record(
        "1½ cups fresh basil leaves (loosely packed)",
        &record,
        &TaggerConfig::default(),
    )?;

    for token in &translated.tokens {
        let candidates: Vec<String> = token.candidates.iter().map(|l| l.to_string()).collect();
        println!("{:<10} {:<24} -> {}", token.token, candidates.join(","), token.label);
    }
    println!();
    print!("{translated}");

    Ok(())
}
