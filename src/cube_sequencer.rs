use log::{debug, info};

use crate::cube_animation::{
    CubeAnimation, CubeAnimationId, CubeCellEnd, CubeCellRotate, CubeCellStart, CubeCircle, CubeHeart, CubeLove,
};
use crate::cube_frame::CubeFrame;

// Ticks in one pass of the show
pub const CUBE_SHOW_LENGTH: u8 = 255;

/// Ticks `start..end` of the show belong to `animation`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeShowEntry {
    pub start: u8,
    pub end: u8,
    pub animation: CubeAnimationId,
}

const fn entry(start: u8, end: u8, animation: CubeAnimationId) -> CubeShowEntry {
    CubeShowEntry { start, end, animation }
}

/// The show, in tick order. Ranges are disjoint and cover `0..CUBE_SHOW_LENGTH`.
pub const CUBE_SHOW: [CubeShowEntry; 12] = [
    entry(0, 10, CubeAnimationId::CellStart),
    entry(10, 20, CubeAnimationId::CellEnd),
    entry(20, 30, CubeAnimationId::CellStart),
    entry(30, 93, CubeAnimationId::CellRotate),
    entry(93, 103, CubeAnimationId::CellEnd),
    entry(103, 113, CubeAnimationId::CellStart),
    entry(113, 123, CubeAnimationId::CellEnd),
    entry(123, 140, CubeAnimationId::Heart),
    entry(140, 157, CubeAnimationId::Circle),
    entry(157, 221, CubeAnimationId::Love),
    entry(221, 238, CubeAnimationId::Circle),
    entry(238, 255, CubeAnimationId::Heart),
];

/// Finds the animation scheduled for `tick`, if any.
pub fn cube_show_lookup(tick: u8) -> Option<CubeAnimationId> {
    CUBE_SHOW
        .iter()
        .find(|entry| entry.start <= tick && tick < entry.end)
        .map(|entry| entry.animation)
}

/// Runs the show: one animation step per tick, drawn into a frame it owns.
///
/// Every animation keeps its phase across visits, so an animation scheduled
/// more than once carries on from wherever its previous visit stopped.
pub struct CubeSequencer {
    frame: CubeFrame,
    show_tick: u8,
    show_count: u32,
    last_animation: Option<CubeAnimationId>,
    cell_start: CubeCellStart,
    cell_end: CubeCellEnd,
    cell_rotate: CubeCellRotate,
    heart: CubeHeart,
    circle: CubeCircle,
    love: CubeLove,
}

impl CubeSequencer {
    pub fn new() -> Self {
        Self {
            frame: CubeFrame::new(),
            show_tick: 0,
            show_count: 0,
            last_animation: None,
            cell_start: CubeCellStart::new(),
            cell_end: CubeCellEnd::new(),
            cell_rotate: CubeCellRotate::new(),
            heart: CubeHeart::new(),
            circle: CubeCircle::new(),
            love: CubeLove::new(),
        }
    }

    /// Draws the step scheduled for the current tick and moves to the next
    /// tick. Returns the animation that ran.
    pub fn tick(&mut self) -> Option<CubeAnimationId> {
        let animation = cube_show_lookup(self.show_tick);

        let frame = &mut self.frame;
        match animation {
            Some(CubeAnimationId::CellStart) => self.cell_start.advance(frame),
            Some(CubeAnimationId::CellEnd) => self.cell_end.advance(frame),
            Some(CubeAnimationId::CellRotate) => self.cell_rotate.advance(frame),
            Some(CubeAnimationId::Heart) => self.heart.advance(frame),
            Some(CubeAnimationId::Circle) => self.circle.advance(frame),
            Some(CubeAnimationId::Love) => self.love.advance(frame),
            None => {}
        }

        if animation != self.last_animation {
            debug!("show tick {}: {:?}", self.show_tick, animation);
            self.last_animation = animation;
        }

        self.show_tick += 1;
        if self.show_tick >= CUBE_SHOW_LENGTH {
            self.show_tick = 0;
            self.show_count = self.show_count.wrapping_add(1);
            info!("show pass {} complete", self.show_count);
        }

        animation
    }

    pub fn frame(&self) -> &CubeFrame {
        &self.frame
    }

    pub fn show_tick(&self) -> u8 {
        self.show_tick
    }

    pub fn show_count(&self) -> u32 {
        self.show_count
    }

    pub fn phase(&self, id: CubeAnimationId) -> u8 {
        match id {
            CubeAnimationId::CellStart => self.cell_start.phase(),
            CubeAnimationId::CellEnd => self.cell_end.phase(),
            CubeAnimationId::CellRotate => self.cell_rotate.phase(),
            CubeAnimationId::Heart => self.heart.phase(),
            CubeAnimationId::Circle => self.circle.phase(),
            CubeAnimationId::Love => self.love.phase(),
        }
    }

    pub fn reset_phase(&mut self, id: CubeAnimationId) {
        match id {
            CubeAnimationId::CellStart => self.cell_start.reset(),
            CubeAnimationId::CellEnd => self.cell_end.reset(),
            CubeAnimationId::CellRotate => self.cell_rotate.reset(),
            CubeAnimationId::Heart => self.heart.reset(),
            CubeAnimationId::Circle => self.circle.reset(),
            CubeAnimationId::Love => self.love.reset(),
        }
    }
}

impl Default for CubeSequencer {
    fn default() -> Self {
        Self::new()
    }
}
