/// Render-side geometry: leaf shape, world → terminal projection, and
/// colour blending.  No terminal I/O here.

use crate::entities::{LeafParticle, Rgb};

/// Leaf polygon in world coordinates: tip, right lobe, notch, left lobe,
/// rotated by `leaf.rotation` degrees around the leaf position.
/// Offsets use floor division on the size.
pub fn leaf_outline(leaf: &LeafParticle) -> [(f32, f32); 4] {
    let s = leaf.size as i32;
    let local = [
        (0, (-s).div_euclid(2)),
        (s.div_euclid(3), s.div_euclid(2)),
        (0, s.div_euclid(4)),
        ((-s).div_euclid(3), s.div_euclid(2)),
    ];
    let (sin, cos) = leaf.rotation.to_radians().sin_cos();
    local.map(|(x, y)| {
        let (x, y) = (x as f32, y as f32);
        (x * cos - y * sin + leaf.x, x * sin + y * cos + leaf.y)
    })
}

/// One-cell stand-in for the leaf polygon, picked from the direction of
/// its tip.
pub fn leaf_glyph(leaf: &LeafParticle) -> char {
    let [tip, ..] = leaf_outline(leaf);
    // Screen y grows downward; flip it for a conventional angle.
    let dx = tip.0 - leaf.x;
    let dy = leaf.y - tip.1;
    let degrees = dy.atan2(dx).to_degrees().rem_euclid(180.0);
    match ((degrees + 22.5) / 45.0) as u32 % 4 {
        0 => '─',
        1 => '╱',
        2 => '│',
        _ => '╲',
    }
}

/// Maps the logical screen onto a grid of terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Self {
            cols,
            rows,
            world_width,
            world_height,
        }
    }

    /// Cell containing a world point, or `None` when it is off-screen.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 || x >= self.world_width || y >= self.world_height {
            return None;
        }
        let col = (x / self.world_width * self.cols as f32) as u16;
        let row = (y / self.world_height * self.rows as f32) as u16;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    /// Row for a world y, clamped to the grid.
    pub fn row(&self, y: f32) -> u16 {
        let row = (y / self.world_height * self.rows as f32).max(0.0) as u16;
        row.min(self.rows.saturating_sub(1))
    }

    /// Column where `width` cells of text must start to be centred.
    pub fn centered_col(&self, width: usize) -> u16 {
        (self.cols / 2).saturating_sub(width as u16 / 2)
    }
}

/// Composite `fg` over `bg` with 8-bit opacity.
pub fn blend(fg: Rgb, bg: Rgb, alpha: u8) -> Rgb {
    let a = alpha as u32;
    let mix = |f: u8, b: u8| ((f as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8;
    (mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}
