//! String transformations
//!
//! Reversal, first-letter casing, case conversion, integer conversion and
//! base64. Numeric conversion and base64 decoding come in two tiers: the
//! lenient functions (`to_int`, `to_uint`, `from_base64`) fall back to a
//! zero value, the strict ones (`parse_int`, `parse_uint`, `decode_base64`)
//! return a [`Result`].

use base64::{engine::general_purpose, Engine as _};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{Result, UtilBeltError};

// Word chunks used by the camel and Pascal converters
static WORD_CHUNK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z]+").expect("Invalid regex pattern"));

/// Reverse a string by Unicode scalar value
///
/// Multi-byte characters are kept intact.
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::reverse;
///
/// assert_eq!(reverse("abc〩"), "〩cba");
/// assert_eq!(reverse("소주"), "주소");
/// ```
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Alias of [`reverse`]
pub fn rstring(s: &str) -> String {
    reverse(s)
}

/// Simple one-to-one lowercase mapping
///
/// `char::to_lowercase` may expand (`'İ'` becomes `"i\u{307}"`); only the
/// first mapped char is kept so the string never grows.
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Simple one-to-one uppercase mapping
///
/// Characters without a single-char uppercase form (`'ß'`) are left as is.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Lowercase the first character of a string
pub fn lc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(lower_char(first)).chain(chars).collect(),
        None => String::new(),
    }
}

/// Alias of [`lc_first`]
pub fn lower_first(s: &str) -> String {
    lc_first(s)
}

/// Uppercase the first character of a string
pub fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(upper_char(first)).chain(chars).collect(),
        None => String::new(),
    }
}

/// Alias of [`uc_first`]
pub fn upper_first(s: &str) -> String {
    uc_first(s)
}

/// Lowercase a string, inserting `separator` at camel-case word boundaries
///
/// A boundary is an uppercase character (not the first) that is followed
/// by a lowercase character or preceded by one. Runs of capitals are
/// therefore split per character when they meet lowercase text: `AbC`
/// becomes `ab_c`.
fn separate_words(s: &str, separator: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_is_lower = chars[i - 1].is_lowercase();
            if next_is_lower || prev_is_lower {
                out.push(separator);
            }
        }
        out.push(lower_char(c));
    }

    out
}

/// Convert a string to snake_case
///
/// Hyphens and spaces become underscores before word boundaries are
/// detected. Leading and trailing separators are kept.
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_snake;
///
/// assert_eq!(to_snake("camelCase"), "camel_case");
/// assert_eq!(to_snake("kebab-case"), "kebab_case");
/// assert_eq!(to_snake("FOO_bar"), "foo_bar");
/// assert_eq!(to_snake("AbC"), "ab_c");
/// ```
pub fn to_snake(s: &str) -> String {
    separate_words(&s.replace(['-', ' '], "_"), '_')
}

/// Alias of [`to_snake`]
pub fn to_snake_case(s: &str) -> String {
    to_snake(s)
}

/// Convert a string to kebab-case
///
/// Underscores and spaces become hyphens, otherwise identical to
/// [`to_snake`].
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_kebab;
///
/// assert_eq!(to_kebab("PascalCase"), "pascal-case");
/// assert_eq!(to_kebab("  test  "), "--test--");
/// ```
pub fn to_kebab(s: &str) -> String {
    separate_words(&s.replace(['_', ' '], "-"), '-')
}

/// Alias of [`to_kebab`]
pub fn to_kebab_case(s: &str) -> String {
    to_kebab(s)
}

/// Uppercase the first ASCII character of a word chunk, keep the rest
fn title_chunk(chunk: &str) -> String {
    let mut titled = chunk.to_string();
    if let Some(first) = titled.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    titled
}

/// Convert a string to camelCase
///
/// The input is split into runs of ASCII letters and digits. The first run
/// is kept as written, every following run is lowercased and then
/// capitalized.
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_camel;
///
/// assert_eq!(to_camel("snake_case"), "snakeCase");
/// assert_eq!(to_camel("kebab-case"), "kebabCase");
/// assert_eq!(to_camel("  test  "), "test");
/// ```
pub fn to_camel(s: &str) -> String {
    WORD_CHUNK_PATTERN
        .find_iter(s)
        .enumerate()
        .map(|(idx, chunk)| {
            if idx == 0 {
                chunk.as_str().to_string()
            } else {
                title_chunk(&chunk.as_str().to_ascii_lowercase())
            }
        })
        .collect()
}

/// Alias of [`to_camel`]
pub fn to_camel_case(s: &str) -> String {
    to_camel(s)
}

/// Convert a string to PascalCase
///
/// Every run of ASCII letters and digits gets its first character
/// uppercased. The rest of each run is left as written, so mixed-case input
/// keeps its capitals: `FOO_bar` becomes `FOOBar`.
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_pascal;
///
/// assert_eq!(to_pascal("snake_case"), "SnakeCase");
/// assert_eq!(to_pascal("camelCase"), "CamelCase");
/// assert_eq!(to_pascal("FOO_bar"), "FOOBar");
/// ```
pub fn to_pascal(s: &str) -> String {
    WORD_CHUNK_PATTERN
        .find_iter(s)
        .map(|chunk| title_chunk(chunk.as_str()))
        .collect()
}

/// Alias of [`to_pascal`]
pub fn to_pascal_case(s: &str) -> String {
    to_pascal(s)
}

/// Keep only the part before the first `.`
fn integer_part(s: &str) -> &str {
    s.split_once('.').map_or(s, |(head, _)| head)
}

/// Parse the integer part of a string
///
/// Everything from the first `.` on is dropped before parsing, so `"5.9"`
/// yields `5` (truncation, not rounding).
///
/// # Errors
///
/// Returns [`UtilBeltError::InvalidNumber`] when the integer part is not a
/// base-10 `i64`.
pub fn parse_int(s: &str) -> Result<i64> {
    Ok(integer_part(s).parse::<i64>()?)
}

/// Parse the integer part of a string as an unsigned 32-bit number
///
/// Signs are rejected, including a leading `+`.
///
/// # Errors
///
/// Returns [`UtilBeltError::InvalidNumber`] when the integer part is signed,
/// not a number, or larger than `u32::MAX`.
pub fn parse_uint(s: &str) -> Result<u32> {
    let digits = integer_part(s);
    if digits.starts_with('+') {
        return Err(UtilBeltError::InvalidNumber(format!(
            "unexpected sign in unsigned value: {digits}"
        )));
    }
    Ok(digits.parse::<u32>()?)
}

/// Lenient [`parse_int`]: unparsable input yields `0`
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_int;
///
/// assert_eq!(to_int("-42"), -42);
/// assert_eq!(to_int("5.3"), 5);
/// assert_eq!(to_int("test"), 0);
/// ```
pub fn to_int(s: &str) -> i64 {
    parse_int(s).unwrap_or_else(|e| {
        debug!("to_int({:?}) fell back to 0: {}", s, e);
        0
    })
}

/// Lenient [`parse_uint`]: unparsable or negative input yields `0`
pub fn to_uint(s: &str) -> u32 {
    parse_uint(s).unwrap_or_else(|e| {
        debug!("to_uint({:?}) fell back to 0: {}", s, e);
        0
    })
}

/// Encode a string as standard base64 (with padding)
///
/// # Example
///
/// ```rust
/// use utilbelt::strings::to_base64;
///
/// assert_eq!(to_base64("foo 123"), "Zm9vIDEyMw==");
/// ```
pub fn to_base64(s: &str) -> String {
    general_purpose::STANDARD.encode(s)
}

/// Decode a standard base64 string into UTF-8 text
///
/// Carriage returns and newlines are skipped, so line-wrapped (MIME-style)
/// input decodes the same as the unwrapped form.
///
/// # Errors
///
/// Returns [`UtilBeltError::InvalidBase64`] for malformed input and
/// [`UtilBeltError::Utf8`] when the decoded bytes are not valid UTF-8.
pub fn decode_base64(s: &str) -> Result<String> {
    let unwrapped: String = s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let bytes = general_purpose::STANDARD.decode(unwrapped)?;
    Ok(String::from_utf8(bytes)?)
}

/// Lenient [`decode_base64`]: any failure yields an empty string
pub fn from_base64(s: &str) -> String {
    decode_base64(s).unwrap_or_else(|e| {
        debug!("from_base64 fell back to empty string: {}", e);
        String::new()
    })
}

/// Resolve a string-to-string transformation by its function name
///
/// Aliases resolve to the same function.
pub fn lookup(name: &str) -> Option<fn(&str) -> String> {
    let transform: fn(&str) -> String = match name {
        "reverse" | "rstring" => reverse,
        "lc_first" | "lower_first" => lc_first,
        "uc_first" | "upper_first" => uc_first,
        "to_snake" | "to_snake_case" => to_snake,
        "to_kebab" | "to_kebab_case" => to_kebab,
        "to_camel" | "to_camel_case" => to_camel,
        "to_pascal" | "to_pascal_case" => to_pascal,
        "to_base64" => to_base64,
        "from_base64" => from_base64,
        _ => return None,
    };
    Some(transform)
}
