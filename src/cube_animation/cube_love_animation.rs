use crate::cube_animation::{CubeAnimation, CubePhase};
use crate::cube_frame::{CubeFrame, CubePolarity};
use crate::cube_glyph::{draw_glyph, CubeGlyph};

const LOVE_WORD: [CubeGlyph; 4] = [CubeGlyph::L, CubeGlyph::O, CubeGlyph::V, CubeGlyph::E];
// Eight rows revealed, then the same eight rows erased
const LOVE_STEPS_PER_GLYPH: u8 = 16;
const LOVE_PHASE_COUNT: u8 = LOVE_WORD.len() as u8 * LOVE_STEPS_PER_GLYPH;

/// Spells the word one letter at a time. Each letter sweeps in as a widening
/// band of rows and is then wiped away row by row from the same edge.
pub struct CubeLove {
    phase: CubePhase,
}

impl CubeAnimation for CubeLove {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(LOVE_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        let phase = self.phase.advance();
        let glyph = LOVE_WORD[(phase / LOVE_STEPS_PER_GLYPH) as usize];
        let step = phase % LOVE_STEPS_PER_GLYPH;

        if step < 8 {
            draw_glyph(frame, glyph, 0, step, CubePolarity::Lit);
        } else {
            draw_glyph(frame, glyph, step - 8, step - 8, CubePolarity::Unlit);
        }
    }

    fn phase(&self) -> u8 {
        self.phase.value()
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_frame::CUBE_ROW_UNLIT;

    fn assert_glyph_rows(frame: &CubeFrame, glyph: CubeGlyph, rows: core::ops::RangeInclusive<u8>) {
        for y in rows {
            for z in 0..8u8 {
                assert_eq!(frame.row(y, z), !glyph.masks()[z as usize], "y={} z={}", y, z);
            }
        }
    }

    #[test]
    fn reveal_widens_the_band_one_row_per_phase() {
        let mut love = CubeLove::new();
        let mut frame = CubeFrame::new();
        frame.fill(0x5a);

        for k in 0..8u8 {
            love.advance(&mut frame);
            assert_glyph_rows(&frame, CubeGlyph::L, 0..=k);

            for y in k + 1..8 {
                for z in 0..8 {
                    assert_eq!(frame.row(y, z), 0x5a);
                }
            }
        }
    }

    #[test]
    fn erase_narrows_from_the_leading_edge() {
        let mut love = CubeLove::new();
        let mut frame = CubeFrame::new();

        for _ in 0..8 {
            love.advance(&mut frame);
        }

        for k in 0..8u8 {
            love.advance(&mut frame);

            for y in 0..=k {
                for z in 0..8 {
                    assert_eq!(frame.row(y, z), CUBE_ROW_UNLIT);
                }
            }
            if k < 7 {
                assert_glyph_rows(&frame, CubeGlyph::L, k + 1..=7);
            }
        }

        assert_eq!(frame, CubeFrame::new());
    }

    #[test]
    fn letters_follow_in_order() {
        let mut love = CubeLove::new();
        let mut frame = CubeFrame::new();

        for (index, glyph) in LOVE_WORD.iter().enumerate() {
            for _ in 0..8 {
                love.advance(&mut frame);
            }
            assert_glyph_rows(&frame, *glyph, 0..=7);
            assert_eq!(love.phase() as usize, index * 16 + 8);

            for _ in 0..8 {
                love.advance(&mut frame);
            }
        }

        assert_eq!(love.phase(), 0);
    }

    #[test]
    fn last_letter_wipe_returns_to_dark() {
        let mut love = CubeLove::new();
        let mut frame = CubeFrame::new();

        for _ in 0..56 {
            love.advance(&mut frame);
        }
        assert_glyph_rows(&frame, CubeGlyph::E, 0..=7);

        for _ in 56..64 {
            love.advance(&mut frame);
        }
        assert_eq!(frame, CubeFrame::new());
    }
}
