/// Replacement rune for each lowercase ASCII letter, `a` through `z`.
/// Elder and younger futhark are mixed to cover the whole alphabet.
const RUNES: [char; 26] = [
    '\u{16a8}', // a ᚨ
    '\u{16d3}', // b
    '\u{16cd}', // c
    '\u{16d1}', // d
    '\u{16c2}', // e
    '\u{16a0}', // f ᚠ
    '\u{16b5}', // g
    '\u{16bb}', // h ᚻ
    '\u{16c1}', // i ᛁ
    '\u{16c3}', // j
    '\u{16b4}', // k
    '\u{16da}', // l ᛚ
    '\u{16d7}', // m ᛗ
    '\u{16bf}', // n
    '\u{16df}', // o
    '\u{16c8}', // p
    '\u{16e9}', // q
    '\u{16b1}', // r ᚱ
    '\u{16ca}', // s
    '\u{16cf}', // t ᛏ
    '\u{16a2}', // u ᚢ
    '\u{16a1}', // v
    '\u{16b9}', // w ᚹ
    '\u{16ea}', // x
    '\u{16a3}', // y
    '\u{16ce}', // z
];

pub fn rune_for(letter: char) -> Option<char> {
    if letter.is_ascii_lowercase() {
        Some(RUNES[(letter as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Lowercases `word` and swaps every ASCII letter for its rune. Anything
/// else is kept as is, so the output never contains ASCII letters.
pub fn transliterate(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(|c| rune_for(c).unwrap_or(c))
        .collect()
}
