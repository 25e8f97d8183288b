// Rows per layer and layers per cube
pub const CUBE_SIZE: usize = 8;
// One row bitmask per (layer, row) pair
pub const CUBE_FRAME_SIZE: usize = CUBE_SIZE * CUBE_SIZE;
// The outputs are active-low, a set bit keeps its cell dark
pub const CUBE_ROW_UNLIT: u8 = 0xff;

/// How a drawing operation treats the cells it touches.
///
/// The raw encoding is `0` for lit and `1` for unlit, anything else is
/// accepted and ignored so callers never have to validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubePolarity {
    Lit,
    Unlit,
    Ignored,
}

impl From<u8> for CubePolarity {
    fn from(raw: u8) -> Self {
        match raw {
            0 => CubePolarity::Lit,
            1 => CubePolarity::Unlit,
            _ => CubePolarity::Ignored,
        }
    }
}

/// Anything the scan driver can pull a layer of row bitmasks from.
pub trait CubeLayers {
    fn layer(&self, z: u8) -> [u8; CUBE_SIZE];
}

/// The 8x8x8 cell state, stored as 64 row bitmasks indexed by `z * 8 + y`.
///
/// Coordinates are never range checked, every caller draws from fixed tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeFrame {
    rows: [u8; CUBE_FRAME_SIZE],
}

impl CubeFrame {
    pub fn new() -> Self {
        Self {
            rows: [CUBE_ROW_UNLIT; CUBE_FRAME_SIZE],
        }
    }

    pub fn set_cell(&mut self, x: u8, y: u8, z: u8, polarity: CubePolarity) {
        let row = &mut self.rows[Self::index(y, z)];

        match polarity {
            CubePolarity::Lit => *row &= !(1 << x),
            CubePolarity::Unlit => *row |= 1 << x,
            CubePolarity::Ignored => {}
        }
    }

    pub fn is_lit(&self, x: u8, y: u8, z: u8) -> bool {
        self.rows[Self::index(y, z)] & (1 << x) == 0
    }

    pub fn set_row(&mut self, y: u8, z: u8, mask: u8) {
        self.rows[Self::index(y, z)] = mask;
    }

    pub fn row(&self, y: u8, z: u8) -> u8 {
        self.rows[Self::index(y, z)]
    }

    /// Writes the same row bitmask into every row of every layer.
    pub fn fill(&mut self, mask: u8) {
        self.rows = [mask; CUBE_FRAME_SIZE];
    }

    pub fn clear_all(&mut self) {
        self.fill(CUBE_ROW_UNLIT);
    }

    pub fn rows(&self) -> &[u8; CUBE_FRAME_SIZE] {
        &self.rows
    }

    fn index(y: u8, z: u8) -> usize {
        z as usize * CUBE_SIZE + y as usize
    }
}

impl Default for CubeFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeLayers for CubeFrame {
    fn layer(&self, z: u8) -> [u8; CUBE_SIZE] {
        let start = z as usize * CUBE_SIZE;
        let mut layer = [CUBE_ROW_UNLIT; CUBE_SIZE];
        layer.copy_from_slice(&self.rows[start..start + CUBE_SIZE]);
        layer
    }
}
