/// Characters trimmed from both ends of a token.
///
/// The trailing group is UTF-8 curly quotes and the trademark sign decoded as
/// cp1252 (`â€œ`, `â€�`, `â„¢`), which is how they show up in the source texts.
pub const SPECIAL_CHARS: &str = " ~!@#$%^&*()_+`-={}[]|\\:\";'<>?,./â€œâ€�â„¢";

#[inline]
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Strips special characters from both ends of `word` and uppercases the rest.
///
/// The left scan never consumes the last character, so a token made only of
/// special characters collapses to its final character instead of vanishing.
pub fn normalize(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let last = chars.len() - 1;
    let mut i = 0;
    while i < last && is_special(chars[i]) {
        i += 1;
    }
    let mut j = last;
    while j > i && is_special(chars[j]) {
        j -= 1;
    }

    chars[i..=j].iter().collect::<String>().to_uppercase()
}
