use crate::cube_animation::{CubeAnimation, CubePhase};
use crate::cube_frame::{CubeFrame, CubePolarity, CUBE_ROW_UNLIT};
use crate::cube_ring::{draw_ring, fill_square, outline_square};

const CIRCLE_PHASE_COUNT: u8 = 17;

// Hollow shells seen from inside each square: only the ring's edge columns lit
const CIRCLE_CORE_SHELL: u8 = !0b0010_0100;
const CIRCLE_INNER_SHELL: u8 = !0b0100_0010;
const CIRCLE_OUTER_SHELL: u8 = !0b0100_0001;
const CIRCLE_INNER_EDGE: u8 = !0b0011_1100;
const CIRCLE_OUTER_EDGE: u8 = !0b0111_1110;
const CIRCLE_FULL_EDGE: u8 = !0b1111_1111;

/// A ring that grows from the core out to the faces of the cube, pauses, and
/// then shrinks back, darkening the ring it leaves behind.
pub struct CubeCircle {
    phase: CubePhase,
}

impl CubeAnimation for CubeCircle {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(CIRCLE_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        match self.phase.advance() {
            0..=1 => draw_ring(frame, 3, 4, CubePolarity::Lit),
            2..=3 => {
                fill_square(frame, 3, 4, CIRCLE_CORE_SHELL);
                outline_square(frame, 2, 5, CIRCLE_INNER_EDGE);
            }
            4..=5 => {
                fill_square(frame, 2, 5, CIRCLE_INNER_SHELL);
                outline_square(frame, 1, 6, CIRCLE_OUTER_EDGE);
            }
            6..=7 => {
                fill_square(frame, 1, 6, CIRCLE_OUTER_SHELL);
                outline_square(frame, 0, 7, CIRCLE_FULL_EDGE);
            }
            // Ring held at full size
            8 => {}
            9..=10 => {
                fill_square(frame, 2, 5, CIRCLE_INNER_SHELL);
                outline_square(frame, 1, 6, CIRCLE_OUTER_EDGE);
                outline_square(frame, 0, 7, CUBE_ROW_UNLIT);
            }
            11..=12 => {
                fill_square(frame, 3, 4, CIRCLE_CORE_SHELL);
                outline_square(frame, 2, 5, CIRCLE_INNER_EDGE);
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
