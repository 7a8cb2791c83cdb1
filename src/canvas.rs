use crate::grid::{Cell, Grid};

pub type Color = [u8; 4];

pub const BLACK: Color = [0x00, 0x00, 0x00, 0xff];
pub const WHITE: Color = [0xff, 0xff, 0xff, 0xff];

/// Axis-aligned pixel rectangle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// An RGBA8 frame buffer, such as the one handed out by `Pixels::frame_mut`.
pub struct Canvas<'frame> {
    frame: &'frame mut [u8],
    width: u32,
    height: u32,
}

impl<'frame> Canvas<'frame> {
    pub fn new(frame: &'frame mut [u8], width: u32, height: u32) -> Self {
        assert_eq!(frame.len(), (width * height * 4) as usize, "frame size mismatch");
        Self { frame, width, height }
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    /// Fill `rect`, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.min(self.width) as usize;
        let x1 = rect.x.saturating_add(rect.w).min(self.width) as usize;
        let y0 = rect.y.min(self.height);
        let y1 = rect.y.saturating_add(rect.h).min(self.height);
        let stride = self.width as usize * 4;

        for row in self.frame.chunks_exact_mut(stride).take(y1 as usize).skip(y0 as usize) {
            for pixel in row[x0 * 4..x1 * 4].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }
}

/// Colors used for each cell state.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: WHITE,
            dead: BLACK,
        }
    }
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

/// Paint every cell of `grid` as a `cell_size` square.
pub fn draw_grid(canvas: &mut Canvas<'_>, grid: &Grid, cell_size: u32, palette: &Palette) {
    canvas.clear(palette.dead);
    for (x, y, cell) in grid.iter() {
        if cell == Cell::Dead {
            continue;
        }
        let rect = Rect {
            x: x as u32 * cell_size,
            y: y as u32 * cell_size,
            w: cell_size,
            h: cell_size,
        };
        canvas.fill_rect(rect, palette.color(cell));
    }
}
