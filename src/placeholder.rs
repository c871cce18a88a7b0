//! Deterministic placeholder art for cards.
//!
//! The tool does no image lookups; the details panel shows locally
//! generated colour cards derived from the character and series names, so
//! the same card always yields the same set.

/// Colour recipe for one placeholder, kept in HSL terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderArt {
    /// Hue in degrees, `0..360`
    pub hue: f32,
    /// Saturation in percent
    pub saturation: f32,
    /// Lightness in percent
    pub lightness: f32,
}

impl PlaceholderArt {
    /// The placeholder colour as 8-bit sRGB
    pub fn rgb(&self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue, self.saturation / 100.0, self.lightness / 100.0)
    }
}

/// Sums the UTF-16 code units of `text`. Collisions are harmless; the seed
/// only picks colours.
pub fn text_seed(text: &str) -> u64 {
    text.encode_utf16().map(u64::from).sum()
}

/// Builds the placeholder set for a card: between three and seven colour
/// cards seeded from the character and series names.
pub fn placeholder_set(character: &str, series: &str) -> Vec<PlaceholderArt> {
    let seed = (text_seed(character) + text_seed(series)) % 100;
    let count = 3 + (seed % 5) as usize;

    (0..count)
        .map(|index| {
            let step = index as u64 + 1;
            PlaceholderArt {
                hue: ((seed * step) % 360) as f32,
                saturation: 70.0 + index as f32 * 5.0,
                lightness: 65.0 - index as f32 * 5.0,
            }
        })
        .collect()
}

/// Standard HSL to sRGB conversion; `h` in degrees, `s` and `l` in `0..=1`
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h / 60.0) % 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}
