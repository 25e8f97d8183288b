use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use crate::cube_frame::{CubeFrame, CubeLayers, CUBE_FRAME_SIZE, CUBE_ROW_UNLIT, CUBE_SIZE};

#[allow(clippy::declare_interior_mutable_const)]
const UNLIT_ROW: AtomicU8 = AtomicU8::new(CUBE_ROW_UNLIT);
#[allow(clippy::declare_interior_mutable_const)]
const UNLIT_FRAME: [AtomicU8; CUBE_FRAME_SIZE] = [UNLIT_ROW; CUBE_FRAME_SIZE];

/// Double buffered frame handed from the tick interrupt to the scan loop.
///
/// Exactly one writer calls [`CubeFrameShare::publish`] and exactly one reader
/// pulls layers out of it. The writer fills the back buffer and then flips the
/// front index, so a layer read that started before the flip finishes on the
/// old frame. Neither side ever waits on the other.
pub struct CubeFrameShare {
    frames: [[AtomicU8; CUBE_FRAME_SIZE]; 2],
    front: AtomicUsize,
}

impl CubeFrameShare {
    pub const fn new() -> Self {
        Self {
            frames: [UNLIT_FRAME; 2],
            front: AtomicUsize::new(0),
        }
    }

    pub fn publish(&self, frame: &CubeFrame) {
        let back = self.front.load(Ordering::Acquire) ^ 1;

        for (slot, &row) in self.frames[back].iter().zip(frame.rows().iter()) {
            slot.store(row, Ordering::Relaxed);
        }

        self.front.store(back, Ordering::Release);
    }
}

impl CubeLayers for CubeFrameShare {
    fn layer(&self, z: u8) -> [u8; CUBE_SIZE] {
        let front = &self.frames[self.front.load(Ordering::Acquire)];
        let start = z as usize * CUBE_SIZE;
        let mut layer = [CUBE_ROW_UNLIT; CUBE_SIZE];

        for (y, row) in layer.iter_mut().enumerate() {
            *row = front[start + y].load(Ordering::Relaxed);
        }

        layer
    }
}
