// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Character class of a tokenizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, digits or underscore (Unicode-aware).
    Word,
    /// Whitespace of any kind.
    Whitespace,
    /// Punctuation and everything else.
    Symbol,
}

/// A maximal run of one character class.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

/// Dominant script of an input string. Latin requires a strict majority of
/// ASCII letters over Cyrillic ones; ties classify as Cyrillic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
    Latin,
}

/// Feature toggles for the normalization engine, all enabled by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Look tokens up in the primary brand/model dictionary.
    pub enable_dict: bool,
    /// Fall back to the secondary auto-translate dictionary.
    pub enable_secondary: bool,
    /// Fall back to matching the token's Latin→Cyrillic transliteration
    /// against the primary dictionary.
    pub enable_translit_fallback: bool,
    /// Append a transliterated rendering when the input is Latin-dominant.
    pub translit_enabled: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            enable_dict: true,
            enable_secondary: true,
            enable_translit_fallback: true,
            translit_enabled: true,
        }
    }
}
