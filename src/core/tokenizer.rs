use crate::core::types::{Token, TokenKind};

/// Splits text into maximal runs of one character class.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes `text` into word/whitespace/symbol runs, left to right.
    ///
    /// Every character lands in exactly one token; concatenating the token
    /// texts in order reproduces `text` exactly.
    pub fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current_kind: Option<TokenKind> = None;
        let mut current_text = String::new();

        for ch in text.chars() {
            let kind = Self::classify_char(ch);
            match current_kind {
                Some(k) if k == kind => current_text.push(ch),
                Some(k) => {
                    tokens.push(Token {
                        text: std::mem::take(&mut current_text),
                        kind: k,
                    });
                    current_text.push(ch);
                    current_kind = Some(kind);
                }
                None => {
                    current_text.push(ch);
                    current_kind = Some(kind);
                }
            }
        }

        if let Some(k) = current_kind {
            tokens.push(Token {
                text: current_text,
                kind: k,
            });
        }

        tokens
    }

    fn classify_char(ch: char) -> TokenKind {
        if ch.is_alphanumeric() || ch == '_' {
            TokenKind::Word
        } else if ch.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Symbol
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn splits_words_whitespace_and_symbols() {
        let tokens = Tokenizer::tokenize("BMW X5, 2021");
        assert_eq!(texts(&tokens), vec!["BMW", " ", "X5", ",", " ", "2021"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[3].kind, TokenKind::Symbol);
    }

    #[test]
    fn underscore_joins_a_word_run() {
        let tokens = Tokenizer::tokenize("e_tron GT");
        assert_eq!(texts(&tokens), vec!["e_tron", " ", "GT"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn mixed_scripts_stay_in_one_word_run() {
        let tokens = Tokenizer::tokenize("Лада Vesta");
        assert_eq!(texts(&tokens), vec!["Лада", " ", "Vesta"]);
    }

    #[test]
    fn symbol_runs_are_maximal() {
        let tokens = Tokenizer::tokenize("ID.3 -- (new)");
        assert_eq!(
            texts(&tokens),
            vec!["ID", ".", "3", " ", "--", " ", "(", "new", ")"]
        );
    }

    #[test]
    fn round_trip_reproduces_the_input() {
        for s in [
            "",
            "   ",
            "Mercedes-Benz G-Class 4x4²",
            "Лада 4х4 Urban!!!",
            "\tBMW\nX5 ",
            "e-tron GT, Q4 e-tron",
        ] {
            let joined: String = Tokenizer::tokenize(s)
                .into_iter()
                .map(|t| t.text)
                .collect();
            assert_eq!(joined, s);
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(Tokenizer::tokenize("").is_empty());
    }
}
