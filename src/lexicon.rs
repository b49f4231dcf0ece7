// src/lexicon.rs
use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::data;

/// One term mapping. The stored key keeps its original casing for display
/// and editing; lookups always go through the lowercase form.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub term: String,
    pub localized: String,
}

/// Insertion-ordered dictionary keyed case-insensitively by term.
///
/// Entries serialize in insertion order so a saved override file diffs
/// stably against its previous version.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in brand/model table.
    pub fn builtin() -> Self {
        Self::from_pairs(data::BASE_BRANDS)
    }

    /// The secondary en→ru auto-translate table.
    pub fn auto_translate() -> Self {
        Self::from_pairs(data::AUTO_TRANSLATE)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut lexicon = Self::new();
        for &(term, localized) in pairs {
            lexicon.insert(term, localized);
        }
        lexicon
    }

    /// Inserts or replaces a term. A replacing write keeps the first-seen
    /// stored key and position; the value is updated (last write wins).
    pub fn insert(&mut self, term: &str, localized: &str) {
        let key = term.to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].localized = localized.to_string(),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(Entry {
                    term: term.to_string(),
                    localized: localized.to_string(),
                });
            }
        }
    }

    /// Case-insensitive lookup by term.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.index
            .get(&term.to_lowercase())
            .map(|&i| self.entries[i].localized.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(term, localized)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.term.as_str(), e.localized.as_str()))
    }

    /// Base entries first, then overrides; an override replaces the base
    /// entry of the same lowercase key.
    pub fn merged(base: &Lexicon, overrides: &Lexicon) -> Lexicon {
        let mut merged = base.clone();
        for (term, localized) in overrides.iter() {
            merged.insert(term, localized);
        }
        merged
    }

    /// Lowercase-key snapshot used by the engine for lookups.
    pub fn case_folded(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.term.to_lowercase(), e.localized.clone()))
            .collect()
    }

    /// Parses the bulk-edit format: one `term,localized` pair per line,
    /// split on the first comma, both sides trimmed. Blank lines and lines
    /// without a comma are skipped. The result replaces a previous override
    /// set; it is never merged into one.
    pub fn parse_bulk(text: &str) -> Lexicon {
        let mut lexicon = Lexicon::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some((term, localized)) = line.split_once(',') {
                lexicon.insert(term.trim(), localized.trim());
            }
        }
        lexicon
    }

    /// Inverse of `parse_bulk`, for round-tripping through a text editor.
    pub fn to_bulk_text(&self) -> String {
        self.iter()
            .map(|(term, localized)| format!("{},{}", term, localized))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for Lexicon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.term, &entry.localized)?;
        }
        map.end()
    }
}

struct LexiconVisitor;

impl<'de> Visitor<'de> for LexiconVisitor {
    type Value = Lexicon;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of term to localized value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Lexicon, A::Error> {
        let mut lexicon = Lexicon::new();
        while let Some((term, value)) = access.next_entry::<String, serde_json::Value>()? {
            lexicon.insert(&term, &coerce_value(value));
        }
        Ok(lexicon)
    }
}

impl<'de> Deserialize<'de> for Lexicon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LexiconVisitor)
    }
}

/// Values are read permissively: strings as-is, everything else as its JSON
/// text.
fn coerce_value(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lexicon = Lexicon::from_pairs(&[("BMW", "БМВ")]);
        assert_eq!(lexicon.get("bmw"), Some("БМВ"));
        assert_eq!(lexicon.get("Bmw"), Some("БМВ"));
        assert_eq!(lexicon.get("audi"), None);
    }

    #[test]
    fn replacing_write_keeps_position_and_stored_key() {
        let mut lexicon = Lexicon::from_pairs(&[("BMW", "старое"), ("Audi", "Ауди")]);
        lexicon.insert("bmw", "БМВ");
        assert_eq!(lexicon.get("BMW"), Some("БМВ"));
        let pairs: Vec<_> = lexicon.iter().collect();
        assert_eq!(pairs, vec![("BMW", "БМВ"), ("Audi", "Ауди")]);
    }

    #[test]
    fn merge_prefers_overrides() {
        let base = Lexicon::from_pairs(&[("BMW", "БМВ"), ("Kia", "Киа")]);
        let overrides = Lexicon::from_pairs(&[("bmw", "Бавария"), ("Haval", "Хавал")]);
        let merged = Lexicon::merged(&base, &overrides);
        assert_eq!(merged.get("bmw"), Some("Бавария"));
        assert_eq!(merged.get("kia"), Some("Киа"));
        assert_eq!(merged.get("haval"), Some("Хавал"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn builtin_table_loads() {
        let builtin = Lexicon::builtin();
        assert_eq!(builtin.get("bmw"), Some("БМВ"));
        assert_eq!(builtin.get("x5"), Some("Икс 5"));
        assert!(builtin.len() > 500);
    }

    #[test]
    fn parse_bulk_skips_blank_and_comma_less_lines() {
        let text = "BMW,БМВ\n\nno comma here\n X5 , Икс 5 \nCamry,Камри,extra";
        let lexicon = Lexicon::parse_bulk(text);
        assert_eq!(lexicon.len(), 3);
        assert_eq!(lexicon.get("bmw"), Some("БМВ"));
        assert_eq!(lexicon.get("x5"), Some("Икс 5"));
        // split happens on the first comma only
        assert_eq!(lexicon.get("camry"), Some("Камри,extra"));
    }

    #[test]
    fn bulk_text_round_trip() {
        let lexicon = Lexicon::from_pairs(&[("BMW", "БМВ"), ("X5", "Икс 5")]);
        let text = lexicon.to_bulk_text();
        assert_eq!(text, "BMW,БМВ\nX5,Икс 5");
        let parsed = Lexicon::parse_bulk(&text);
        assert_eq!(
            parsed.iter().collect::<Vec<_>>(),
            lexicon.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let lexicon = Lexicon::from_pairs(&[("Zeekr", "Зикр"), ("Avatr", "Аватр"), ("BMW", "БМВ")]);
        let json = serde_json::to_string_pretty(&lexicon).unwrap();
        let reloaded: Lexicon = serde_json::from_str(&json).unwrap();
        assert_eq!(
            reloaded.iter().collect::<Vec<_>>(),
            lexicon.iter().collect::<Vec<_>>()
        );
        // non-ASCII values stay literal in the file
        assert!(json.contains("Зикр"));
    }

    #[test]
    fn non_string_json_values_are_coerced() {
        let json = r#"{"Model 3": 3, "electric": true, "nested": {"a": 1}}"#;
        let lexicon: Lexicon = serde_json::from_str(json).unwrap();
        assert_eq!(lexicon.get("model 3"), Some("3"));
        assert_eq!(lexicon.get("electric"), Some("true"));
        assert_eq!(lexicon.get("nested"), Some(r#"{"a":1}"#));
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(serde_json::from_str::<Lexicon>("\"not an object\"").is_err());
        assert!(serde_json::from_str::<Lexicon>("[1, 2]").is_err());
    }
}
