use crate::cube_frame::CubeFrame;

mod cube_cell_animation;
mod cube_circle_animation;
mod cube_heart_animation;
mod cube_love_animation;
pub use cube_cell_animation::*;
pub use cube_circle_animation::*;
pub use cube_heart_animation::*;
pub use cube_love_animation::*;

/// A self-paced animation. Every call to [`CubeAnimation::advance`] draws one
/// step into the frame and moves the private phase on, wrapping at the
/// animation's own bound. Nothing outside resets the phase between visits.
pub trait CubeAnimation {
    fn new() -> Self;
    fn advance(&mut self, frame: &mut CubeFrame);
    fn phase(&self) -> u8;
    fn reset(&mut self);
}

/// Names the animations the show table can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeAnimationId {
    CellStart,
    CellEnd,
    CellRotate,
    Heart,
    Circle,
    Love,
}

/// Wrapping step counter owned by a single animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubePhase {
    value: u8,
    bound: u8,
}

impl CubePhase {
    pub const fn new(bound: u8) -> Self {
        Self { value: 0, bound }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns the phase to draw now and steps past it.
    pub fn advance(&mut self) -> u8 {
        let current = self.value;

        self.value += 1;
        if self.value >= self.bound {
            self.value = 0;
        }

        current
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
