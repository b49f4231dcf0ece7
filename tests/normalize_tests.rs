//! End-to-end scenarios driving the public engine API, plus the override
//! persistence round trip.

use brand_core::core::tokenizer::Tokenizer;
use brand_core::persistence::{load_overrides, save_overrides, OverrideStore};
use brand_core::{Lexicon, NormalizationEngine, NormalizeOptions};

fn engine_from(primary: &[(&str, &str)]) -> NormalizationEngine {
    NormalizationEngine::new(
        &Lexicon::from_pairs(primary),
        &Lexicon::new(),
        NormalizeOptions::default(),
    )
}

#[test]
fn bmw_x5_is_substituted_and_annotated() {
    let engine = engine_from(&[("bmw", "БМВ"), ("x5", "Икс 5")]);
    // both tokens are all-uppercase in the source, so both replacements are
    // uppercased; the already-Cyrillic reassembly passes through the final
    // transliteration unchanged
    assert_eq!(engine.normalize("BMW X5"), "\"BMW X5\" - (БМВ ИКС 5)");
}

#[test]
fn unknown_latin_text_gets_a_letter_by_letter_rendering() {
    let engine = engine_from(&[]);
    assert_eq!(
        engine.normalize("Toyota Camry"),
        "\"Toyota Camry\" - (Тоёта Камрй)"
    );
}

#[test]
fn builtin_table_translates_known_models() {
    let engine = NormalizationEngine::new(
        &Lexicon::builtin(),
        &Lexicon::auto_translate(),
        NormalizeOptions::default(),
    );
    assert_eq!(
        engine.normalize("Toyota Camry"),
        "\"Toyota Camry\" - (Тойота Камри)"
    );
    assert_eq!(engine.normalize("BMW X5"), "\"BMW X5\" - (БМВ ИКС 5)");
}

#[test]
fn secondary_table_catches_brands_missing_from_overridden_primaries() {
    let engine = NormalizationEngine::new(
        &Lexicon::from_pairs(&[("camry", "Камри")]),
        &Lexicon::auto_translate(),
        NormalizeOptions::default(),
    );
    // "mclaren" only exists in the auto-translate table
    assert_eq!(
        engine.normalize("McLaren Camry"),
        "\"McLaren Camry\" - (Макларен Камри)"
    );
}

#[test]
fn misspelled_brand_is_left_alone_by_the_fallback() {
    let engine = engine_from(&[("lamborghini", "Ламборгини")]);
    // the transliteration of "Lamborgini" is not an exact dictionary key,
    // so only the final letter-by-letter rendering reflects it
    assert_eq!(
        engine.normalize("Lamborgini Urus"),
        "\"Lamborgini Urus\" - (Ламборгини Урус)"
    );
}

#[test]
fn cyrillic_dominant_input_discards_substitutions() {
    let engine = engine_from(&[("веста", "Vesta")]);
    assert_eq!(engine.normalize("Лада Веста 2021"), "\"Лада Веста 2021\"");
}

#[test]
fn tokenizer_round_trip_over_catalog_strings() {
    for s in [
        "BMW X5 xDrive30d (G05), 2021",
        "Лада Веста SW Cross — комплектация \"Люкс\"",
        "e-tron GT / ID.4; цена: 5 000 000 ₽",
    ] {
        let joined: String = Tokenizer::tokenize(s).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, s);
    }
}

#[test]
fn override_round_trip_through_the_side_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("additional_brands.json");

    let overrides = Lexicon::parse_bulk("Zeekr,Зикр\nBMW,Бавария");
    save_overrides(&overrides, &path).unwrap();
    let reloaded = load_overrides(&path);
    assert_eq!(
        reloaded.iter().collect::<Vec<_>>(),
        overrides.iter().collect::<Vec<_>>()
    );

    // an override beats the builtin entry for the same key
    let store = OverrideStore::open(path);
    let engine = NormalizationEngine::new(
        &store.merged_with_builtin(),
        &Lexicon::auto_translate(),
        NormalizeOptions::default(),
    );
    assert_eq!(engine.normalize("BMW"), "\"BMW\" - (БАВАРИЯ)");
}

#[test]
fn malformed_override_file_degrades_to_the_builtin_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("additional_brands.json");
    std::fs::write(&path, "not json").unwrap();

    let engine = NormalizationEngine::from_overrides_file(&path, NormalizeOptions::default());
    assert_eq!(engine.normalize("BMW"), "\"BMW\" - (БМВ)");
}
