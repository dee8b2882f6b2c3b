// crates/domain/src/normalize.rs

/// Split a line into raw tokens: maximal runs of non-whitespace.
///
/// Leading, trailing and repeated whitespace produce no empty tokens.
#[inline]
pub fn raw_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Lowercase `raw` and keep only the alphabetic characters of the result.
///
/// Filtering happens after lowercasing: some letters lowercase into several
/// characters (`'İ'` becomes `"i\u{307}"`), and anything that is not itself a
/// letter is dropped, so the output is always a fixed point.
///
/// A token with no letters (`"--"`, `"1601"`) normalizes to an empty string.
/// Inner punctuation is dropped rather than splitting the token, so
/// `"Hamlet's"` becomes `"hamlets"` and `"Hamlet--Horatio"` becomes
/// `"hamlethoratio"`.
pub fn normalize_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    normalize_into(raw, &mut out);
    out
}

/// Same as [`normalize_token`] but writes into a reusable buffer.
///
/// `out` is cleared first.
pub fn normalize_into(raw: &str, out: &mut String) {
    out.clear();
    out.extend(
        raw.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_alphabetic()),
    );
}
