use crate::cube_animation::{CubeAnimation, CubePhase};
use crate::cube_frame::CubeFrame;

const CELL_PHASE_COUNT: u8 = 10;
// Six motifs plus one held step
const CELL_ROTATE_PHASE_COUNT: u8 = 7;

// Lit cells per row, applied to every layer. Each band is held for two phases.
const CELL_BANDS: [[u8; 8]; 5] = [
    [0x00; 8],
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x3c, 0x3c, 0x3c, 0x3c, 0x00, 0x00],
    [0x00, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x00],
    [0xc3, 0xc3, 0x00, 0x00, 0x00, 0x00, 0xc3, 0xc3],
];

// Corner blocks walking around the vertical axis, starting from the last band
const CELL_ROTATE_MOTIFS: [[u8; 8]; 6] = [
    CELL_BANDS[4],
    [
        0b0110_0000,
        0b0110_0011,
        0b0000_0011,
        0b0000_0000,
        0b0000_0000,
        0b1100_0000,
        0b1100_0110,
        0b0000_0110,
    ],
    [
        0b0011_0000,
        0b0011_0000,
        0b0000_0011,
        0b0000_0011,
        0b1100_0000,
        0b1100_0000,
        0b0000_1100,
        0b0000_1100,
    ],
    [
        0b0001_1000,
        0b0001_1000,
        0b0000_0000,
        0b1100_0011,
        0b1100_0011,
        0b0000_0000,
        0b0001_1000,
        0b0001_1000,
    ],
    [
        0b0000_1100,
        0b0000_1100,
        0b1100_0000,
        0b1100_0000,
        0b0000_0011,
        0b0000_0011,
        0b0011_0000,
        0b0011_0000,
    ],
    [
        0b0000_0110,
        0b1100_0110,
        0b1100_0000,
        0b0000_0000,
        0b0000_0000,
        0b0000_0011,
        0b0110_0011,
        0b0110_0000,
    ],
];

fn draw_pattern(frame: &mut CubeFrame, pattern: &[u8; 8]) {
    for (y, &mask) in pattern.iter().enumerate() {
        for z in 0..8 {
            frame.set_row(y as u8, z, !mask);
        }
    }
}

/// Opens the cube up from dark into corner columns, growing a centred bar.
pub struct CubeCellStart {
    phase: CubePhase,
}

impl CubeAnimation for CubeCellStart {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(CELL_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        let band = self.phase.advance() / 2;
        draw_pattern(frame, &CELL_BANDS[band as usize]);
    }

    fn phase(&self) -> u8 {
        self.phase.value()
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}

/// Plays the start bands backwards, collapsing the corner columns to dark.
pub struct CubeCellEnd {
    phase: CubePhase,
}

impl CubeAnimation for CubeCellEnd {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(CELL_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        let band = CELL_BANDS.len() - 1 - (self.phase.advance() / 2) as usize;
        draw_pattern(frame, &CELL_BANDS[band]);
    }

    fn phase(&self) -> u8 {
        self.phase.value()
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}

pub struct CubeCellRotate {
    phase: CubePhase,
}

impl CubeAnimation for CubeCellRotate {
    fn new() -> Self {
        Self {
            phase: CubePhase::new(CELL_ROTATE_PHASE_COUNT),
        }
    }

    fn advance(&mut self, frame: &mut CubeFrame) {
        // The last phase holds the previous motif
        if let Some(motif) = CELL_ROTATE_MOTIFS.get(self.phase.advance() as usize) {
            draw_pattern(frame, motif);
        }
    }

    fn phase(&self) -> u8 {
        self.phase.value()
    }

    fn reset(&mut self) {
        self.phase.reset();
    }
}
