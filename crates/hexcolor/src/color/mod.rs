//! The [`HexColor`] value type.
//!
//! Accepts `#RGB`, `#RRGGBB`, `#RGBA` and `#RRGGBBAA` (leading `#` optional,
//! any case) and stores the color as `#` followed by 6 or 8 uppercase hex
//! digits. Short forms are expanded on construction. A color without a stored
//! alpha byte reads as fully opaque.

mod ops;
mod parse;


use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{Channel, HexColorError};

/// A color held as a normalized hex string.
///
/// Equality and hashing compare the RGBA-expanded form, so `#000000` and
/// `#000000FF` are equal and hash identically.
#[derive(Clone)]
pub struct HexColor {
    value: String,
}

impl HexColor {
    /// Parse and normalize a color string.
    pub fn new(input: &str) -> Result<Self, HexColorError> {
        match parse::normalize(input) {
            Ok(value) => Ok(Self { value }),
            Err(e) => {
                tracing::debug!(input, "rejected color: {e}");
                Err(e)
            }
        }
    }

    /// Build a color from an arbitrary JSON value.
    ///
    /// Only JSON strings are accepted; numbers and every other kind of value
    /// fail with [`HexColorError::InvalidFormat`] rather than being coerced.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, HexColorError> {
        match value {
            serde_json::Value::String(s) => Self::new(s),
            other => Err(HexColorError::InvalidFormat(format!(
                "{other}. color must be a hex string"
            ))),
        }
    }

    /// The normalized value, e.g. `#11AAFF` or `#11AAFF88`.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether an alpha byte is stored (8-digit form).
    pub fn has_alpha(&self) -> bool {
        self.value.len() == 9
    }

    /// The hex digits packed most-significant-first, alpha included when stored.
    pub fn to_u32(&self) -> u32 {
        let (r, g, b, a) = self.rgba();
        if self.has_alpha() {
            u32::from_be_bytes([r, g, b, a])
        } else {
            u32::from_be_bytes([0, r, g, b])
        }
    }

    pub fn to_f64(&self) -> f64 {
        f64::from(self.to_u32())
    }

    pub fn red(&self) -> u8 {
        self.channel(Channel::Red)
    }

    pub fn green(&self) -> u8 {
        self.channel(Channel::Green)
    }

    pub fn blue(&self) -> u8 {
        self.channel(Channel::Blue)
    }

    /// The stored alpha byte, or 255 when none is stored.
    pub fn alpha(&self) -> u8 {
        if self.has_alpha() {
            self.channel(Channel::Alpha)
        } else {
            u8::MAX
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.red(), self.green(), self.blue(), self.alpha())
    }

    pub fn edit_red(&mut self, hex: &str) -> Result<(), HexColorError> {
        self.edit(Channel::Red, hex)
    }

    pub fn edit_green(&mut self, hex: &str) -> Result<(), HexColorError> {
        self.edit(Channel::Green, hex)
    }

    pub fn edit_blue(&mut self, hex: &str) -> Result<(), HexColorError> {
        self.edit(Channel::Blue, hex)
    }

    /// Replace the alpha byte, appending one if the color has none yet.
    pub fn edit_alpha(&mut self, hex: &str) -> Result<(), HexColorError> {
        self.edit(Channel::Alpha, hex)
    }

    fn channel(&self, channel: Channel) -> u8 {
        parse::byte_at(&self.value, channel.offset())
    }

    fn edit(&mut self, channel: Channel, hex: &str) -> Result<(), HexColorError> {
        let digits = parse::component(channel, hex).inspect_err(|e| {
            tracing::debug!(color = %self.value, "rejected edit: {e}");
        })?;

        let start = channel.offset();
        if start == self.value.len() {
            // Only alpha can land here: a 6-digit color grows to 8 digits.
            self.value.push_str(&digits);
        } else {
            self.value.replace_range(start..start + 2, &digits);
        }
        Ok(())
    }

    /// The 8-digit form, with `FF` appended when no alpha is stored.
    fn rgba_expanded(&self) -> [u8; 4] {
        let (r, g, b, a) = self.rgba();
        [r, g, b, a]
    }
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = HexColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<&HexColor> for u32 {
    fn from(color: &HexColor) -> Self {
        color.to_u32()
    }
}

impl From<&HexColor> for f64 {
    fn from(color: &HexColor) -> Self {
        color.to_f64()
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor('{}')", self.value)
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgba_expanded() == other.rgba_expanded()
    }
}

impl Eq for HexColor {}

impl Hash for HexColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgba_expanded().hash(state);
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
