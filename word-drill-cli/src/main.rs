use std::collections::HashSet;

use word_drill_core::engine::format::format_word_list;
use word_drill_core::engine::generator::generate_words;
use word_drill_core::engine::settings::{FieldValue, Limits, Settings, SettingsForm};
use word_drill_core::engine::validate::validate;

fn main() {
    // Validator diagnostics go through the log facade; run with
    // RUST_LOG=warn to see why a submission was rejected
    env_logger::init();

    // Bounds for every settings field; passed explicitly into the
    // validator and the generator
    let limits = Limits::default();

    // Assemble a submission the way a form would: trimmed-on-coercion
    // text, numeric inputs as numbers, the checkbox as a flag
    let mut form = SettingsForm::new();
    form.set("chars", FieldValue::Text("  abcdef  ".to_owned()));
    form.set("wordsToGenerate", FieldValue::Number(10.0));
    form.set("wordLength", FieldValue::Number(5.0));
    form.set("columns", FieldValue::Number(5.0));
    form.set("randomWordLength", FieldValue::Flag(false));

    // A submission missing a field is rejected as a whole; callers only
    // get the verdict, details land in the log
    let mut broken = form.clone();
    broken.unset("columns");
    if !validate(&broken, &limits) {
        println!("No words generated. Invalid settings");
    }

    if !validate(&form, &limits) {
        println!("No words generated. Invalid settings");
        return;
    }

    // Field-by-field coercion into typed settings, with the defaults as
    // fallback for anything unusable
    let settings = form.to_settings(&Settings::default());
    let words = generate_words(&settings, &limits);

    let distinct: HashSet<&String> = words.iter().collect();
    println!("Words generated: {}", words.len());
    println!("Duplicate words: {}", words.len() - distinct.len());

    // columns == 0 would give one flat line instead of wrapped rows
    print!("{}", format_word_list(&words, settings.columns));
}
