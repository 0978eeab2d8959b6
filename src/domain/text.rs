// src/domain/text.rs

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts after any non-alphabetic character, so `D'ÁVILA` becomes
/// `D'Ávila`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

/// Strips the `.0` left on postal codes that went through a float column.
pub fn strip_float_suffix(s: &str) -> &str {
    let trimmed = s.trim();
    trimmed.strip_suffix(".0").unwrap_or(trimmed)
}
