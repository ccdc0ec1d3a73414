use crate::Errors;
use std::fmt;
use std::str::FromStr;

/// RGB color assigned to a track for visualization
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrackColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrackColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The color in the `#rrggbb` form understood by HTML canvas and most UI toolkits
    ///
    pub fn hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TrackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for TrackColor {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Errors::InvalidColor(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Color returned for identifiers that are not (or no longer) known to the tracker
pub const DEFAULT_TRACK_COLOR: TrackColor = TrackColor::new(0x00, 0xff, 0x88);

/// Palette the tracker cycles through when new tracks are created
pub const DEFAULT_PALETTE: [TrackColor; 8] = [
    TrackColor::new(0x00, 0xff, 0x88),
    TrackColor::new(0xff, 0x6b, 0x6b),
    TrackColor::new(0x4e, 0xcd, 0xc4),
    TrackColor::new(0x45, 0xb7, 0xd1),
    TrackColor::new(0xf9, 0xca, 0x24),
    TrackColor::new(0xf0, 0x93, 0x2b),
    TrackColor::new(0xeb, 0x4d, 0x4b),
    TrackColor::new(0x6c, 0x5c, 0xe7),
];
