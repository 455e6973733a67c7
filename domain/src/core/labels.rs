//! Option labels shown next to each answer (`A`, `B`, `C`, ...)

/// Display letter for a zero-based option index.
///
/// Indices past `Z` fall back to `?`; questions that large are not
/// answerable by letter and are expected to be answered by number.
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'A' + i) as char)
        .unwrap_or('?')
}

/// Zero-based index for a letter label, case-insensitive.
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}
