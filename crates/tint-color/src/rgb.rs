#![forbid(unsafe_code)]

//! The opaque RGB color type.
//!
//! Themes operate in opaque RGB: three integer channels in `[0, 255]`, no
//! alpha. Channels are clamped by construction (`u8` cannot leave range), so
//! no downstream consumer ever observes an out-of-range value.

use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts an optional leading `#` or `0x`/`0X`, then either three hex
    /// digits (shorthand, each digit doubled: `abc` → `aabbcc`) or six hex
    /// digits. Any other length or a non-hex character yields `None`; this
    /// never panics.
    pub fn parse_hex(raw: &str) -> Option<Rgb> {
        let s = raw.trim();
        let s = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let digits = s.as_bytes();
        match digits.len() {
            3 => {
                let r = hex_digit(digits[0])?;
                let g = hex_digit(digits[1])?;
                let b = hex_digit(digits[2])?;
                // Shorthand doubles each digit: 0xA -> 0xAA.
                Some(Rgb::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_pair(digits[0], digits[1])?;
                let g = hex_pair(digits[2], digits[3])?;
                let b = hex_pair(digits[4], digits[5])?;
                Some(Rgb::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Canonical uppercase `#RRGGBB` form.
    ///
    /// Round-trips through [`Rgb::parse_hex`].
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation toward `other`.
    ///
    /// `t` is clamped to `[0, 1]`: `t = 0` returns `self`, `t = 1` returns
    /// `other`.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb::new(
            lerp_channel(self.r, other.r, t),
            lerp_channel(self.g, other.g, t),
            lerp_channel(self.b, other.b, t),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Mix two optional colors; an absent input returns the other unchanged.
pub fn mix_opt(a: Option<Rgb>, b: Option<Rgb>, t: f64) -> Option<Rgb> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.mix(b, t)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let value = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    Some(hex_digit(high)? * 16 + hex_digit(low)?)
}
