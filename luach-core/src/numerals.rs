//! Hebrew letter numerals (gematria).
//!
//! Each letter carries a value (א = 1 … ת = 400, final forms equal to their
//! ordinary forms) and a numeral is the sum of its letters. Years are written
//! with a thousands prefix: a letter followed by a geresh, e.g. `ה'תשפג` for
//! 5783. A lone letter with a geresh is an ordinary numeral (`ט'` is 9), so
//! exact thousands are spelled out with the word אלפים: `ה' אלפים` is 5000.
//!
//! ```
//! use luach_core::numerals::{number_to_word, word_to_number};
//!
//! assert_eq!(number_to_word(5783), "ה'תשפג");
//! assert_eq!(word_to_number("ה'תשפג").unwrap(), 5783);
//! assert_eq!(number_to_word(15), "טו");
//! assert_eq!(word_to_number("ט״ו").unwrap(), 15);
//! ```

use crate::errors::{LuachError, LuachResult};

const HUNDREDS: [(u32, char); 4] = [(400, 'ת'), (300, 'ש'), (200, 'ר'), (100, 'ק')];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const UNITS: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];

/// Characters that separate the thousands prefix from the rest.
const THOUSANDS_MARKERS: [char; 4] = ['\'', '-', '`', '׳'];

/// Words marking a numeral as a count of thousands.
const THOUSANDS_WORDS: [&str; 2] = ["אלפים", "אלף"];

/// Punctuation that carries no value and is skipped.
const IGNORED: [char; 7] = ['\'', '"', '׳', '״', ' ', '-', '`'];

/// Value of a single letter, or `None` for anything else.
pub fn letter_value(c: char) -> Option<u32> {
    let v = match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(v)
}

/// Writes `n` as a letter numeral.
///
/// Values of 1000 and above get a thousands prefix, and exact thousands are
/// followed by אלפים; 15 and 16 are written `טו` and `טז`. Zero has no letter
/// form and yields an empty string.
pub fn number_to_word(n: u32) -> String {
    let mut out = String::new();
    let thousands = n / 1000;
    if thousands > 0 && n % 1000 == 0 {
        return format!("{}' {}", number_to_word(thousands), THOUSANDS_WORDS[0]);
    }
    if thousands > 0 {
        out.push_str(&number_to_word(thousands));
        out.push('\'');
    }

    let mut rest = n % 1000;
    for (value, letter) in HUNDREDS {
        while rest >= value {
            out.push(letter);
            rest -= value;
        }
    }
    match rest {
        15 => out.push_str("טו"),
        16 => out.push_str("טז"),
        _ => {
            if rest >= 10 {
                out.push(TENS[(rest / 10 - 1) as usize]);
            }
            if rest % 10 > 0 {
                out.push(UNITS[(rest % 10 - 1) as usize]);
            }
        }
    }
    out
}

/// Reads a letter numeral, or a plain decimal string.
///
/// The thousands prefix is a single letter followed by a geresh, `-` or
/// backtick, and needs at least one letter after it. A numeral followed by
/// אלפים or אלף counts thousands.
///
/// # Errors
///
/// [`LuachError::MalformedNumeral`] for an empty string, any character that
/// is neither a letter nor ignorable punctuation, or a value past `u32`.
pub fn word_to_number(s: &str) -> LuachResult<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(LuachError::malformed_numeral(s, "empty numeral"));
    }
    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed
            .parse()
            .map_err(|_| LuachError::malformed_numeral(s, "decimal value out of range"));
    }

    if let Some((count, word)) = trimmed.rsplit_once(char::is_whitespace) {
        if THOUSANDS_WORDS.contains(&word) {
            return word_to_number(count)?
                .checked_mul(1000)
                .ok_or_else(|| LuachError::malformed_numeral(s, "value out of range"));
        }
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let (thousands, body) = if chars.len() > 2 && THOUSANDS_MARKERS.contains(&chars[1]) {
        let prefix = letter_value(chars[0])
            .ok_or_else(|| LuachError::malformed_numeral(s, "thousands prefix is not a letter"))?;
        (prefix * 1000, &chars[2..])
    } else {
        (0, &chars[..])
    };

    let mut total: u32 = 0;
    let mut letters = 0;
    for &c in body {
        if IGNORED.contains(&c) {
            continue;
        }
        let v = letter_value(c).ok_or_else(|| {
            LuachError::malformed_numeral(s, &format!("'{c}' is not a numeral letter"))
        })?;
        total = total
            .checked_add(v)
            .ok_or_else(|| LuachError::malformed_numeral(s, "value out of range"))?;
        letters += 1;
    }
    if letters == 0 && thousands == 0 {
        return Err(LuachError::malformed_numeral(s, "no numeral letters"));
    }
    total
        .checked_add(thousands)
        .ok_or_else(|| LuachError::malformed_numeral(s, "value out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_word() {
        assert_eq!(number_to_word(1), "א");
        assert_eq!(number_to_word(29), "כט");
        assert_eq!(number_to_word(16), "טז");
        assert_eq!(number_to_word(115), "קטו");
        assert_eq!(number_to_word(793), "תשצג");
        assert_eq!(number_to_word(900), "תתק");
        assert_eq!(number_to_word(4938), "ד'תתקלח");
        assert_eq!(number_to_word(0), "");
        assert_eq!(number_to_word(5000), "ה' אלפים");
    }

    #[test]
    fn test_word_to_number() {
        assert_eq!(word_to_number("רד").unwrap(), 204);
        assert_eq!(word_to_number("תשצ\"ג").unwrap(), 793);
        assert_eq!(word_to_number("ה-תשפג").unwrap(), 5783);
        assert_eq!(word_to_number("ט'").unwrap(), 9);
        assert_eq!(word_to_number("ךםןףץ").unwrap(), 280);
        assert_eq!(word_to_number(" 42 ").unwrap(), 42);
        assert_eq!(word_to_number("ה' אלפים").unwrap(), 5000);
        assert_eq!(word_to_number("ג אלף").unwrap(), 3000);
    }

    #[test]
    fn test_word_to_number_overflow() {
        let long = "ת".repeat(11_000_000);
        assert!(matches!(
            word_to_number(&long),
            Err(LuachError::MalformedNumeral { .. })
        ));
    }

    #[test]
    fn test_word_to_number_rejects() {
        assert!(matches!(
            word_to_number(""),
            Err(LuachError::MalformedNumeral { .. })
        ));
        assert!(word_to_number("abc").is_err());
        assert!(word_to_number("״").is_err());
        assert!(word_to_number("x אלפים").is_err());
    }

    #[test]
    fn test_inverse_over_range() {
        for n in 1..6000 {
            assert_eq!(word_to_number(&number_to_word(n)).unwrap(), n, "n = {n}");
        }
    }
}
