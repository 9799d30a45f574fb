//! Title normalisation for filenames and SUMMARY values.

/// Longest title kept, counted in UTF-16 code units.
const MAX_TITLE_UNITS: usize = 100;

/// Make a title safe for both a filename and a SUMMARY line.
///
/// Truncates to the first 100 UTF-16 code units, then drops every character
/// that is not an ASCII letter, digit, space, underscore or hyphen.
pub fn sanitize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut units = 0;
    input
        .chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= MAX_TITLE_UNITS
        })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect()
}

/// Capitalise each word the way en-US title casing does.
///
/// A word starts at a letter and runs over letters, digits and apostrophes
/// (`mp3s`, `it's`). Digits before a word are passed through as-is, so
/// `2nd` becomes `2Nd`. Words whose letters are all uppercase are kept as
/// acronyms; every other word gets an uppercase first letter and a
/// lowercase remainder.
pub fn title_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_alphabetic() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '\'') {
            i += 1;
        }

        let word = &chars[start..i];
        if word.iter().filter(|c| c.is_alphabetic()).all(|c| c.is_uppercase()) {
            out.extend(word);
            continue;
        }

        out.extend(word[0].to_uppercase());
        for c in &word[1..] {
            out.extend(c.to_lowercase());
        }
    }

    out
}
