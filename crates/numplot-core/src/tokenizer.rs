//! Splitting a line of free-form text into located numbers.
//!
//! A line is cut at commas, semicolons and whitespace. Each fragment loses a
//! leading run of punctuation (brackets, quotes, ...) and the longest numeric
//! literal at its start becomes a [`Token`]. Anything else is skipped.
//!
//! Columns are counted in chars and always advance by the full fragment
//! length plus its separator, so ranges stay aligned with the source even
//! when fragments are dropped.

use numplot_model::{SourceRange, Token};
use tracing::trace;

/// Splits `line` into tokens. `origin_line`/`origin_column` locate the first
/// character of `line` in the document.
pub fn tokenize(line: &str, origin_line: usize, origin_column: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut column = Some(origin_column);
    for fragment in line.split(is_separator) {
        let Some(start) = column else {
            trace!(line = origin_line, "column overflow, stopped tokenizing");
            break;
        };
        let (noise, candidate) = strip_leading_noise(fragment);
        let number_start = start.checked_add(noise);
        match (parse_number_prefix(candidate), number_start) {
            (Some((value, len)), Some(number_start)) => {
                let Some(number_end) = number_start.checked_add(len) else {
                    break;
                };
                let range = SourceRange::new(origin_line, number_start, origin_line, number_end);
                tokens.push(Token::new(value, range));
            }
            (None, _) if !candidate.is_empty() => {
                trace!(
                    line = origin_line,
                    column = ?number_start,
                    fragment = candidate,
                    "skipped non-numeric fragment"
                );
            }
            _ => {}
        }
        column = start.checked_add(fragment.chars().count() + 1);
    }
    tokens
}

pub fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Characters that may start a number or a word and are therefore kept.
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

/// Removes leading punctuation, returning the number of chars removed and
/// the remainder.
pub fn strip_leading_noise(fragment: &str) -> (usize, &str) {
    match fragment.char_indices().find(|&(_, c)| is_kept(c)) {
        Some((offset, _)) => (fragment[..offset].chars().count(), &fragment[offset..]),
        None => (fragment.chars().count(), ""),
    }
}

/// Parses the longest decimal literal at the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction (`1`, `1.`,
/// `.5`, `1.5`), an optional exponent, or `Infinity`. Returns the value and
/// the literal's length; trailing characters are ignored.
pub fn parse_number_prefix(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if text[end..].starts_with("Infinity") {
        end += "Infinity".len();
    } else {
        let int_digits = count_digits(&bytes[end..]);
        end += int_digits;
        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(&bytes[end + 1..]);
            if int_digits > 0 || frac_digits > 0 {
                end += 1 + frac_digits;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        end += exponent_len(&bytes[end..]);
    }
    let literal = &text[..end];
    literal.parse::<f64>().ok().map(|value| (value, end))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn exponent_len(bytes: &[u8]) -> usize {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[1 + sign..]);
    if digits == 0 { 0 } else { 1 + sign + digits }
}
