use std::fmt;

/// One of the four 8-bit channels of a [`HexColor`](crate::HexColor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Byte offset of the channel's two digits within the normalized value.
    pub(crate) fn offset(self) -> usize {
        match self {
            Channel::Red => 1,
            Channel::Green => 3,
            Channel::Blue => 5,
            Channel::Alpha => 7,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    #[error("invalid color format: {0}. supported: #RGB, #RRGGBB, #RGBA, #RRGGBBAA")]
    InvalidFormat(String),

    #[error("invalid character in color: {0}. only 0-9 and A-F are allowed")]
    InvalidCharacter(String),

    #[error("invalid {channel} component: {value:?}. expected 2 hex digits")]
    InvalidComponent { channel: Channel, value: String },
}
