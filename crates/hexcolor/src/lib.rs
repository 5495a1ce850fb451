//! Hex color value type.
//!
//! [`HexColor`] parses `#RGB`, `#RRGGBB`, `#RGBA` and `#RRGGBBAA` strings,
//! exposes and edits individual channels, and combines colors with `+`
//! (channel average) and `-` (channel difference floored at zero).
//!
//! ```rust
//! use hexcolor::HexColor;
//!
//! let mut color = HexColor::new("1af").unwrap();
//! assert_eq!(color.as_str(), "#11AAFF");
//!
//! color.edit_alpha("80").unwrap();
//! assert_eq!(color.rgba(), (0x11, 0xAA, 0xFF, 0x80));
//!
//! let mixed = HexColor::new("#FFFFFF").unwrap() + HexColor::new("#000000").unwrap();
//! assert_eq!(mixed.to_string(), "#808080");
//! ```

pub mod color;
pub mod errors;

pub use color::HexColor;
pub use errors::{Channel, HexColorError};

pub type Result<T> = std::result::Result<T, HexColorError>;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
