use crate::cube_frame::{CubeFrame, CubePolarity, CUBE_ROW_UNLIT};

/// One of the four letters the word animation spells out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeGlyph {
    L,
    O,
    V,
    E,
}

// Lit cells per layer, top layer first
const GLYPH_L: [u8; 8] = [
    0b1110_0000,
    0b1110_0000,
    0b1110_0000,
    0b1110_0000,
    0b1110_0000,
    0b1111_1111,
    0b1111_1111,
    0b1111_1111,
];

const GLYPH_O: [u8; 8] = [
    0b0011_1100,
    0b0110_0110,
    0b1100_0011,
    0b1100_0011,
    0b1100_0011,
    0b1100_0011,
    0b0110_0110,
    0b0011_1100,
];

const GLYPH_V: [u8; 8] = [
    0b1100_0011,
    0b1100_0011,
    0b0110_0110,
    0b0110_0110,
    0b0110_0110,
    0b0011_1100,
    0b0011_1100,
    0b0001_1000,
];

const GLYPH_E: [u8; 8] = [
    0b1111_1111,
    0b1111_1111,
    0b1110_0000,
    0b1111_1110,
    0b1111_1110,
    0b1110_0000,
    0b1111_1111,
    0b1111_1111,
];

impl CubeGlyph {
    /// Lit cells of the letter, one mask per layer.
    pub fn masks(self) -> &'static [u8; 8] {
        match self {
            CubeGlyph::L => &GLYPH_L,
            CubeGlyph::O => &GLYPH_O,
            CubeGlyph::V => &GLYPH_V,
            CubeGlyph::E => &GLYPH_E,
        }
    }
}

/// Stamps `glyph` onto every row `y` in `start..=end` of all layers, or darkens
/// those rows again when `polarity` is [`CubePolarity::Unlit`].
///
/// Widening `end` call over call grows the letter into a band, erasing one row
/// at a time with `start == end` shrinks it from the other edge.
pub fn draw_glyph(frame: &mut CubeFrame, glyph: CubeGlyph, start: u8, end: u8, polarity: CubePolarity) {
    match polarity {
        CubePolarity::Lit => {
            for y in start..=end {
                for (z, &mask) in glyph.masks().iter().enumerate() {
                    frame.set_row(y, z as u8, !mask);
                }
            }
        }
        CubePolarity::Unlit => {
            for y in start..=end {
                for z in 0..8 {
                    frame.set_row(y, z, CUBE_ROW_UNLIT);
                }
            }
        }
        CubePolarity::Ignored => {}
    }
}
