/// Conversion direction between the two script tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LatinToCyrillic,
    CyrillicToLatin,
}

/// Latin candidates ordered longest key first; the scan takes the first
/// prefix match, so digraphs always win over their leading letter. Letters
/// without a mapping (h, j, q, w, x in either case) copy through unchanged.
const LAT_TO_CYR: &[(&str, char)] = &[
    ("Shch", 'Щ'),
    ("shch", 'щ'),
    ("SHCH", 'Щ'),
    ("Yo", 'Ё'),
    ("yo", 'ё'),
    ("YO", 'Ё'),
    ("Zh", 'Ж'),
    ("zh", 'ж'),
    ("ZH", 'Ж'),
    ("Kh", 'Х'),
    ("kh", 'х'),
    ("KH", 'Х'),
    ("Ts", 'Ц'),
    ("ts", 'ц'),
    ("TS", 'Ц'),
    ("Ch", 'Ч'),
    ("ch", 'ч'),
    ("CH", 'Ч'),
    ("Sh", 'Ш'),
    ("sh", 'ш'),
    ("SH", 'Ш'),
    ("Yu", 'Ю'),
    ("yu", 'ю'),
    ("YU", 'Ю'),
    ("Ya", 'Я'),
    ("ya", 'я'),
    ("YA", 'Я'),
    ("Y'", 'Ы'),
    ("y'", 'ы'),
    ("E'", 'Э'),
    ("e'", 'э'),
    ("C", 'К'),
    ("A", 'А'),
    ("a", 'а'),
    ("B", 'Б'),
    ("b", 'б'),
    ("V", 'В'),
    ("v", 'в'),
    ("G", 'Г'),
    ("g", 'г'),
    ("D", 'Д'),
    ("d", 'д'),
    ("E", 'Е'),
    ("e", 'е'),
    ("Z", 'З'),
    ("z", 'з'),
    ("I", 'И'),
    ("i", 'и'),
    ("Y", 'Й'),
    ("y", 'й'),
    ("K", 'К'),
    ("k", 'к'),
    ("L", 'Л'),
    ("l", 'л'),
    ("M", 'М'),
    ("m", 'м'),
    ("N", 'Н'),
    ("n", 'н'),
    ("O", 'О'),
    ("o", 'о'),
    ("P", 'П'),
    ("p", 'п'),
    ("R", 'Р'),
    ("r", 'р'),
    ("S", 'С'),
    ("s", 'с'),
    ("T", 'Т'),
    ("t", 'т'),
    ("U", 'У'),
    ("u", 'у'),
    ("F", 'Ф'),
    ("f", 'ф'),
];

/// Converts `text` between scripts. Total over arbitrary input: characters
/// outside the active table pass through unchanged.
pub fn transliterate(text: &str, direction: Direction) -> String {
    match direction {
        Direction::LatinToCyrillic => latin_to_cyrillic(text),
        Direction::CyrillicToLatin => cyrillic_to_latin(text),
    }
}

fn latin_to_cyrillic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some(&(key, cyr)) = LAT_TO_CYR.iter().find(|&&(key, _)| rest.starts_with(key)) {
            out.push(cyr);
            rest = &rest[key.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

fn cyrillic_to_latin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match cyr_to_lat(ch) {
            Some(lat) => out.push_str(lat),
            None => out.push(ch),
        }
    }
    out
}

fn cyr_to_lat(ch: char) -> Option<&'static str> {
    match ch {
        'А' => Some("A"),
        'а' => Some("a"),
        'Б' => Some("B"),
        'б' => Some("b"),
        'В' => Some("V"),
        'в' => Some("v"),
        'Г' => Some("G"),
        'г' => Some("g"),
        'Д' => Some("D"),
        'д' => Some("d"),
        'Е' => Some("E"),
        'е' => Some("e"),
        'Ё' => Some("Yo"),
        'ё' => Some("yo"),
        'Ж' => Some("Zh"),
        'ж' => Some("zh"),
        'З' => Some("Z"),
        'з' => Some("z"),
        'И' => Some("I"),
        'и' => Some("i"),
        'Й' => Some("Y"),
        'й' => Some("y"),
        'К' => Some("K"),
        'к' => Some("k"),
        'Л' => Some("L"),
        'л' => Some("l"),
        'М' => Some("M"),
        'м' => Some("m"),
        'Н' => Some("N"),
        'н' => Some("n"),
        'О' => Some("O"),
        'о' => Some("o"),
        'П' => Some("P"),
        'п' => Some("p"),
        'Р' => Some("R"),
        'р' => Some("r"),
        'С' => Some("S"),
        'с' => Some("s"),
        'Т' => Some("T"),
        'т' => Some("t"),
        'У' => Some("U"),
        'у' => Some("u"),
        'Ф' => Some("F"),
        'ф' => Some("f"),
        'Х' => Some("Kh"),
        'х' => Some("kh"),
        'Ц' => Some("Ts"),
        'ц' => Some("ts"),
        'Ч' => Some("Ch"),
        'ч' => Some("ch"),
        'Ш' => Some("Sh"),
        'ш' => Some("sh"),
        'Щ' => Some("Shch"),
        'щ' => Some("shch"),
        'Ы' => Some("Y'"),
        'ы' => Some("y'"),
        'Э' => Some("E'"),
        'э' => Some("e'"),
        'Ю' => Some("Yu"),
        'ю' => Some("yu"),
        'Я' => Some("Ya"),
        'я' => Some("ya"),
        _ => None,
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    fn is_cyrillic(ch: char) -> bool {
        ('\u{0400}'..='\u{04FF}').contains(&ch)
    }

    #[test]
    fn digraphs_win_over_single_letters() {
        assert_eq!(
            transliterate("Shchuka", Direction::LatinToCyrillic),
            "Щука"
        );
        assert_eq!(transliterate("Zhiguli", Direction::LatinToCyrillic), "Жигули");
        assert_eq!(transliterate("YAMAHA", Direction::LatinToCyrillic), "ЯМАHА");
    }

    #[test]
    fn letter_by_letter_rendering() {
        assert_eq!(
            transliterate("Toyota Camry", Direction::LatinToCyrillic),
            "Тоёта Камрй"
        );
        assert_eq!(
            transliterate("Lamborgini", Direction::LatinToCyrillic),
            "Ламборгини"
        );
    }

    #[test]
    fn unmapped_latin_letters_pass_through() {
        assert_eq!(transliterate("Wow", Direction::LatinToCyrillic), "Wоw");
        assert_eq!(transliterate("Jeep", Direction::LatinToCyrillic), "Jееп");
        assert_eq!(transliterate("X5", Direction::LatinToCyrillic), "X5");
    }

    #[test]
    fn cyrillic_input_is_untouched_in_the_latin_direction() {
        assert_eq!(
            transliterate("БМВ ИКС 5", Direction::LatinToCyrillic),
            "БМВ ИКС 5"
        );
    }

    #[test]
    fn cyrillic_to_latin_per_character() {
        assert_eq!(transliterate("Москва", Direction::CyrillicToLatin), "Moskva");
        assert_eq!(transliterate("Щука", Direction::CyrillicToLatin), "Shchuka");
        assert_eq!(transliterate("Эх", Direction::CyrillicToLatin), "E'kh");
    }

    #[test]
    fn digits_and_punctuation_pass_both_directions() {
        for s in ["2021-05", "...", "123 !@# 456"] {
            assert_eq!(transliterate(s, Direction::LatinToCyrillic), s);
            assert_eq!(transliterate(s, Direction::CyrillicToLatin), s);
        }
    }

    #[test]
    fn empty_input_returns_empty() {
        assert_eq!(transliterate("", Direction::LatinToCyrillic), "");
        assert_eq!(transliterate("", Direction::CyrillicToLatin), "");
    }

    #[test]
    fn latin_keys_are_ordered_longest_first() {
        let lengths: Vec<usize> = LAT_TO_CYR.iter().map(|(k, _)| k.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn table_sides_agree_on_script() {
        for &(key, cyr) in LAT_TO_CYR {
            assert!(key.chars().all(|c| !is_cyrillic(c)), "{key}");
            assert!(is_cyrillic(cyr));
        }
    }
}
