use crate::core::tokenizer::Tokenizer;
use crate::core::translit::{transliterate, Direction};
use crate::core::types::{NormalizeOptions, Script};
use crate::lexicon::Lexicon;
use crate::persistence::load_overrides;
use std::collections::HashMap;
use std::path::Path;

/// Applies dictionary substitution and transliteration to raw cell text.
///
/// The engine snapshots case-folded copies of both dictionaries at
/// construction; later edits to the stores it was built from are not
/// observed. `normalize` itself is a pure function of the snapshot.
pub struct NormalizationEngine {
    primary: HashMap<String, String>,
    secondary: HashMap<String, String>,
    options: NormalizeOptions,
}

impl NormalizationEngine {
    pub fn new(primary: &Lexicon, secondary: &Lexicon, options: NormalizeOptions) -> Self {
        Self {
            primary: primary.case_folded(),
            secondary: secondary.case_folded(),
            options,
        }
    }

    /// Builds an engine from the builtin brand table merged with whatever
    /// overrides are readable at `path` (an unreadable file contributes
    /// nothing), plus the builtin auto-translate table.
    pub fn from_overrides_file(path: &Path, options: NormalizeOptions) -> Self {
        let overrides = load_overrides(path);
        let merged = Lexicon::merged(&Lexicon::builtin(), &overrides);
        Self::new(&merged, &Lexicon::auto_translate(), options)
    }

    /// Dominant script of `text`: counts Cyrillic letters against ASCII
    /// ones. Latin wins only on a strict majority; ties are Cyrillic.
    pub fn detect_script(text: &str) -> Script {
        let mut cyrillic = 0usize;
        let mut latin = 0usize;
        for ch in text.chars() {
            match ch {
                'А'..='я' | 'Ё' | 'ё' => cyrillic += 1,
                'A'..='Z' | 'a'..='z' => latin += 1,
                _ => {}
            }
        }
        if latin > cyrillic {
            Script::Latin
        } else {
            Script::Cyrillic
        }
    }

    /// Normalizes one cell of raw text.
    ///
    /// Tokenizes, substitutes eligible tokens (primary dictionary, then
    /// secondary, then transliteration fallback), reassembles, and renders
    /// the final form: Latin-dominant input gains a parenthesized
    /// transliteration of the substituted text, while Cyrillic-dominant
    /// input is returned quoted as-is and the substituted text is dropped.
    pub fn normalize(&self, text: &str) -> String {
        let script = Self::detect_script(text);
        let mut tokens: Vec<String> = Tokenizer::tokenize(text)
            .into_iter()
            .map(|t| t.text)
            .collect();

        for token in tokens.iter_mut() {
            if let Some(replacement) = self.substitute(token) {
                *token = replacement;
            }
        }

        let joined = tokens.concat();

        if script == Script::Latin && self.options.translit_enabled {
            let rendered = transliterate(&joined, Direction::LatinToCyrillic);
            format!("\"{}\" - ({})", text, rendered)
        } else {
            format!("\"{}\"", text)
        }
    }

    /// `None` cells normalize to an empty string instead of failing.
    pub fn normalize_cell(&self, cell: Option<&str>) -> String {
        match cell {
            Some(text) => self.normalize(text),
            None => String::new(),
        }
    }

    /// Applies `normalize_cell` to every cell of a spreadsheet column.
    pub fn normalize_column<'a, I>(&self, cells: I) -> Vec<String>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        cells.into_iter().map(|cell| self.normalize_cell(cell)).collect()
    }

    /// Substitution priority: primary dictionary, secondary dictionary,
    /// transliteration fallback against the primary dictionary. Tokens that
    /// are not purely alphanumeric (whitespace, punctuation, underscored
    /// words) never match. The fallback also runs over an empty replacement
    /// produced by an earlier stage; an empty replacement that survives it
    /// still applies.
    fn substitute(&self, token: &str) -> Option<String> {
        let trimmed = token.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return None;
        }
        let key = token.to_lowercase();

        let mut replacement: Option<String> = None;
        if self.options.enable_dict {
            if let Some(value) = self.primary.get(&key) {
                replacement = Some(preserve_case(token, value));
            }
        }
        if replacement.is_none() && self.options.enable_secondary {
            if let Some(value) = self.secondary.get(&key) {
                replacement = Some(preserve_case(token, value));
            }
        }
        if replacement.as_deref().map_or(true, str::is_empty)
            && self.options.enable_translit_fallback
            && is_ascii_latin(token)
        {
            let transliterated = transliterate(token, Direction::LatinToCyrillic);
            if let Some(value) = self.primary.get(&transliterated.to_lowercase()) {
                replacement = Some(preserve_case(token, value));
            }
        }
        replacement
    }
}

/// Maps the source token's casing pattern onto the replacement: an
/// all-uppercase source uppercases it, a title-case source capitalizes it,
/// anything else takes the stored value verbatim.
fn preserve_case(src: &str, repl: &str) -> String {
    if is_all_upper(src) {
        repl.to_uppercase()
    } else if is_title(src) {
        capitalize(repl)
    } else {
        repl.to_string()
    }
}

/// At least one cased character and no lowercase ones ("BMW", "X5").
fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Title case over cased runs: each run starts uppercase and continues
/// lowercase ("Bmw", "X5" yes; "BMw", "bmw", "X5s" no).
fn is_title(s: &str) -> bool {
    let mut has_cased = false;
    let mut prev_cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            has_cased = true;
        } else {
            prev_cased = false;
        }
    }
    has_cased
}

/// First character uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_ascii_latin(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
