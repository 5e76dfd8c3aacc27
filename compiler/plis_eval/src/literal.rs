//! Literal-to-integer coercion.

/// Interpret literal text as a base-10 integer, permissively.
///
/// Leading whitespace is skipped, then an optional `+` or `-`, then the
/// longest run of ASCII digits. Whatever follows is ignored, and text with
/// no digits in that position is 0. Values beyond `i64` saturate.
///
/// ```text
/// "42" -> 42    "-7" -> -7    "12abc" -> 12    "abc" -> 0
/// ```
pub fn coerce_literal(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, digit| {
            let acc = acc.saturating_mul(10);
            if negative {
                acc.saturating_sub(i64::from(digit))
            } else {
                acc.saturating_add(i64::from(digit))
            }
        })
}
