#![cfg_attr(not(test), no_std)]

pub mod cube_animation;
pub mod cube_frame;
pub mod cube_frame_share;
pub mod cube_glyph;
pub mod cube_ring;
pub mod cube_scan;
pub mod cube_sequencer;
