//! Line colors.

use plotters::style::RGBColor;
use rand::{Rng, seq::SliceRandom};

/// Digits random colors are drawn from. `C` and `F` are left out, which keeps
/// the palette away from the palest tones.
const HEX_DIGITS: &[u8] = b"0123456789ABDE";

/// A random `#RRGGBB` color string.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut out = String::with_capacity(7);
    out.push('#');
    for _ in 0..6 {
        if let Some(&digit) = HEX_DIGITS.choose(rng) {
            out.push(char::from(digit));
        }
    }
    out
}

/// A random color, as drawn by [`random_hex_color`].
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> RGBColor {
    let hex = random_hex_color(rng);
    parse_hex_color(&hex).unwrap_or(RGBColor(0, 0, 0))
}

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
