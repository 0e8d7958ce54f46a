//! Suffix rewrite tables for the verb engine.
//!
//! Keys are the final kana of a dictionary form (or of a derived form for
//! [`PAST_VOICING`]). Lookups are linear; nine entries beat any map.

/// U-verb final kana → i-row kana (masu stem).
pub const U_VERB_I_ROW: [(char, char); 9] = [
    ('う', 'い'),
    ('く', 'き'),
    ('ぐ', 'ぎ'),
    ('す', 'し'),
    ('つ', 'ち'),
    ('ぬ', 'に'),
    ('ぶ', 'び'),
    ('む', 'み'),
    ('る', 'り'),
];

/// U-verb final kana → a-row plus ない (plain negative).
pub const U_VERB_NEGATIVE: [(char, &str); 9] = [
    ('う', "わない"),
    ('く', "かない"),
    ('ぐ', "がない"),
    ('す', "さない"),
    ('つ', "たない"),
    ('ぬ', "なない"),
    ('ぶ', "ばない"),
    ('む', "まない"),
    ('る', "らない"),
];

/// U-verb final kana → te-form ending (音便).
pub const U_VERB_TE: [(char, &str); 9] = [
    ('う', "って"),
    ('つ', "って"),
    ('る', "って"),
    ('む', "んで"),
    ('ぶ', "んで"),
    ('ぬ', "んで"),
    ('く', "いて"),
    ('ぐ', "いで"),
    ('す', "して"),
];

/// Te-form final kana → plain past final kana.
pub const PAST_VOICING: [(char, char); 2] = [('て', 'た'), ('で', 'だ')];

// Closed lexical exceptions. These are whole-word matches checked before the
// tables above; they are facts of the lexicon, not derivable from the ending.

/// 行く takes って rather than the いて the く row predicts.
pub const TE_OVERRIDES: [(&str, &str); 1] = [("行く", "行って")];

/// ある has no a-row negative; its negative is bare ない.
pub const NEGATIVE_OVERRIDES: [(&str, &str); 1] = [("ある", "ない")];

/// Find `key` in a small `(key, value)` table.
pub fn lookup<K: PartialEq + Copy, V: Copy>(table: &[(K, V)], key: K) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
