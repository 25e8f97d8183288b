use crate::cube_animation::{CubeAnimation, CubePhase};
use crate::cube_frame::{CubeFrame, CubePolarity, CUBE_ROW_UNLIT};
use crate::cube_ring::{draw_ring, fill_square, outline_square};

const HEART_PHASE_COUNT: u8 = 17;

/// A solid block that swells from the 2x2 core to the full face, pauses, and
/// then sheds its outer shell one ring at a time until it is gone.
pub struct CubeHeart {
    phase: CubePhase,
}

impl CubeAnimation for CubeHeart {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(HEART_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        match self.phase.advance() {
            0..=1 => {
                frame.clear_all();
                draw_ring(frame, 3, 4, CubePolarity::Lit);
            }
            2..=3 => draw_ring(frame, 2, 5, CubePolarity::Lit),
            4..=5 => draw_ring(frame, 1, 6, CubePolarity::Lit),
            6..=7 => draw_ring(frame, 0, 7, CubePolarity::Lit),
            // Beat held at full size
            8 => {}
            9..=10 => {
                draw_ring(frame, 1, 6, CubePolarity::Lit);
                outline_square(frame, 0, 7, CUBE_ROW_UNLIT);
            }
            11..=12 => {
                draw_ring(frame, 2, 5, CubePolarity::Lit);
                outline_square(frame, 1, 6, CUBE_ROW_UNLIT);
            }
            13..=14 => {
                draw_ring(frame, 3, 4, CubePolarity::Lit);
                outline_square(frame, 2, 5, CUBE_ROW_UNLIT);
            }
            _ => fill_square(frame, 3, 4, CUBE_ROW_UNLIT),
        }
    }

    fn phase(&self) -> u8 {
        self.phase.value()
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}
