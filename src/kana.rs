//! Character-level helpers for Japanese dictionary forms.
//!
//! All slicing goes through `char` boundaries; a dictionary form is a handful of
//! multi-byte code points, so byte offsets never leak out of this module.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        // 々 repeats the previous kanji and behaves like one.
        || c == '々'
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts the prolonged sound mark ー (U+30FC) as well, which shows up in
/// readings of loanword-based adjectives.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// Check that every character is kana or kanji, i.e. something the rule tables
/// could plausibly act on.
pub fn is_japanese_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c))
}

/// Split off the final character: `"書く"` → `("書", 'く')`.
pub fn split_last(s: &str) -> Option<(&str, char)> {
    let c = s.chars().next_back()?;
    Some((&s[..s.len() - c.len_utf8()], c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("およぐ"));
        assert!(is_hiragana_reading("あ"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading("カタカナ"));
        assert!(!is_hiragana_reading("abc"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('泳'));
        assert!(is_kanji('々'));
        assert!(!is_kanji('あ'));
    }

    #[test]
    fn test_is_japanese_word() {
        assert!(is_japanese_word("食べる"));
        assert!(is_japanese_word("サボる"));
        assert!(is_japanese_word("時々"));
        assert!(!is_japanese_word("taberu"));
        assert!(!is_japanese_word(""));
    }

    #[test]
    fn test_split_last() {
        assert_eq!(split_last("書く"), Some(("書", 'く')));
        assert_eq!(split_last("る"), Some(("", 'る')));
        assert_eq!(split_last(""), None);
    }
}
