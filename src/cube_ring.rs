use crate::cube_frame::{CubeFrame, CubePolarity};

/// The four concentric squares the ring primitive knows how to draw, from the
/// 2x2 core out to the full 8x8 face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeRing {
    Core,
    Inner,
    Outer,
    Full,
    Unmatched,
}

impl CubeRing {
    pub fn from_bounds(start: u8, end: u8) -> Self {
        match (start, end) {
            (3, 4) => CubeRing::Core,
            (2, 5) => CubeRing::Inner,
            (1, 6) => CubeRing::Outer,
            (0, 7) => CubeRing::Full,
            _ => CubeRing::Unmatched,
        }
    }

    /// Cells of a row that fall inside the ring.
    pub fn mask(self) -> Option<u8> {
        match self {
            CubeRing::Core => Some(0b0001_1000),
            CubeRing::Inner => Some(0b0011_1100),
            CubeRing::Outer => Some(0b0111_1110),
            CubeRing::Full => Some(0b1111_1111),
            CubeRing::Unmatched => None,
        }
    }
}

/// Fills the `[start, end] x [start, end]` square of rows and layers with the
/// ring mask matching that square.
///
/// [`CubePolarity::Lit`] lights the cells inside the ring. [`CubePolarity::Unlit`]
/// writes the mask itself, which darkens the ring and lights everything else on
/// those rows. Bounds other than the four known squares draw nothing.
pub fn draw_ring(frame: &mut CubeFrame, start: u8, end: u8, polarity: CubePolarity) {
    let mask = match CubeRing::from_bounds(start, end).mask() {
        Some(mask) => mask,
        None => return,
    };

    match polarity {
        CubePolarity::Lit => fill_square(frame, start, end, !mask),
        CubePolarity::Unlit => fill_square(frame, start, end, mask),
        CubePolarity::Ignored => {}
    }
}

/// Writes `row` into every (y, z) with both coordinates in `start..=end`.
pub fn fill_square(frame: &mut CubeFrame, start: u8, end: u8, row: u8) {
    for y in start..=end {
        for z in start..=end {
            frame.set_row(y, z, row);
        }
    }
}

/// Writes `row` into the border of the `start..=end` square only.
pub fn outline_square(frame: &mut CubeFrame, start: u8, end: u8, row: u8) {
    for z in start..=end {
        frame.set_row(start, z, row);
        frame.set_row(end, z, row);
    }

    for y in start + 1..end {
        frame.set_row(y, start, row);
        frame.set_row(y, end, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_frame::CUBE_ROW_UNLIT;

    #[test]
    fn bounds_decoding() {
        assert_eq!(CubeRing::from_bounds(3, 4), CubeRing::Core);
        assert_eq!(CubeRing::from_bounds(2, 5), CubeRing::Inner);
        assert_eq!(CubeRing::from_bounds(1, 6), CubeRing::Outer);
        assert_eq!(CubeRing::from_bounds(0, 7), CubeRing::Full);
        assert_eq!(CubeRing::from_bounds(4, 3), CubeRing::Unmatched);
        assert_eq!(CubeRing::from_bounds(2, 6), CubeRing::Unmatched);
    }

    #[test]
    fn lit_ring_covers_its_square_only() {
        let mut frame = CubeFrame::new();
        draw_ring(&mut frame, 1, 6, CubePolarity::Lit);

        for z in 0..8u8 {
            for y in 0..8u8 {
                let inside = (1..=6).contains(&y) && (1..=6).contains(&z);
                let expected = if inside { 0b1000_0001 } else { CUBE_ROW_UNLIT };
                assert_eq!(frame.row(y, z), expected, "y={} z={}", y, z);
            }
        }
    }

    #[test]
    fn fill_then_clear_darkens_the_ring_cells() {
        let mut frame = CubeFrame::new();
        draw_ring(&mut frame, 2, 5, CubePolarity::Lit);

        for z in 2..=5 {
            for y in 2..=5 {
                for x in 2..=5 {
                    assert!(frame.is_lit(x, y, z));
                }
            }
        }

        draw_ring(&mut frame, 2, 5, CubePolarity::Unlit);

        for z in 2..=5 {
            for y in 2..=5 {
                for x in 2..=5 {
                    assert!(!frame.is_lit(x, y, z), "x={} y={} z={}", x, y, z);
                }
            }
        }
    }

    #[test]
    fn unknown_bounds_and_polarity_draw_nothing() {
        let mut frame = CubeFrame::new();
        draw_ring(&mut frame, 1, 5, CubePolarity::Lit);
        draw_ring(&mut frame, 0, 7, CubePolarity::from(4));
        assert_eq!(frame, CubeFrame::new());
    }

    #[test]
    fn outline_leaves_interior() {
        let mut frame = CubeFrame::new();
        outline_square(&mut frame, 2, 5, 0x00);

        let lit_rows = frame.rows().iter().filter(|&&row| row == 0x00).count();
        assert_eq!(lit_rows, 12);
        assert_eq!(frame.row(3, 3), CUBE_ROW_UNLIT);
        assert_eq!(frame.row(2, 3), 0x00);
        assert_eq!(frame.row(4, 5), 0x00);
        assert_eq!(frame.row(1, 1), CUBE_ROW_UNLIT);
    }
}
