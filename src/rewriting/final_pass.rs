/// `language`, already in runes.
pub const LANGUAGE_RUNES: &str = "\u{16da}\u{16a8}\u{16bf}\u{16b5}\u{16a2}\u{16a8}\u{16b5}\u{16c2}";

/// Plain substring replacement over the rewritten program. It doesn't know
/// about tokens, so it also hits comments, strings and exempt names.
pub fn finish(text: &str) -> String {
    text.replace("language", LANGUAGE_RUNES)
}
