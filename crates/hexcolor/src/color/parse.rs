//! Validation and normalization of hex color strings.

use crate::errors::{Channel, HexColorError};

/// Hex digit counts accepted after the leading `#`.
const ACCEPTED_LENGTHS: [usize; 4] = [3, 4, 6, 8];

fn is_hex_digit(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='F')
}

/// Uppercase, `#`-prefix, validate and expand a raw color string.
///
/// The returned string always holds exactly 6 or 8 uppercase digits.
pub(super) fn normalize(input: &str) -> Result<String, HexColorError> {
    let mut color = input.to_uppercase();
    if !color.starts_with('#') {
        color.insert(0, '#');
    }

    let digits = &color[1..];
    if !ACCEPTED_LENGTHS.contains(&digits.chars().count()) {
        return Err(HexColorError::InvalidFormat(color));
    }
    if !digits.chars().all(is_hex_digit) {
        return Err(HexColorError::InvalidCharacter(color));
    }

    match digits.len() {
        3 | 4 => {
            let mut expanded = String::with_capacity(1 + digits.len() * 2);
            expanded.push('#');
            for c in digits.chars() {
                expanded.push(c);
                expanded.push(c);
            }
            Ok(expanded)
        }
        _ => Ok(color),
    }
}

/// Uppercase and check a two-digit component used by the `edit_*` methods.
pub(super) fn component(channel: Channel, hex: &str) -> Result<String, HexColorError> {
    let upper = hex.to_uppercase();
    if upper.chars().count() != 2 || !upper.chars().all(is_hex_digit) {
        return Err(HexColorError::InvalidComponent {
            channel,
            value: hex.to_string(),
        });
    }
    Ok(upper)
}

/// Decode the two digits starting at `offset` of a normalized value.
pub(super) fn byte_at(value: &str, offset: usize) -> u8 {
    value
        .get(offset..offset + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}
