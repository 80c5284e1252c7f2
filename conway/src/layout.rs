// layout.rs - Pixel geometry shared by input hit-testing and drawing

/// Size of the "Next Generation" control in pixels.
pub const CONTROL_WIDTH: u32 = 200;
pub const CONTROL_HEIGHT: u32 = 50;
/// Distance from the bottom window edge to the top of the control.
pub const CONTROL_BOTTOM_OFFSET: u32 = 60;

/// Axis-aligned pixel rectangle, half-open on the right and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && py >= self.y && px - self.x < self.width && py - self.y < self.height
    }
}

/// What a pointer press at some pixel landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Control,
    Cell { x: usize, y: usize },
}

/// Window and grid geometry.
///
/// Cell size is the window size divided by the cell count, rounded down;
/// the leftover strip on the right and bottom belongs to no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    window_width: u32,
    window_height: u32,
    cells_x: usize,
    cells_y: usize,
    cell_width: u32,
    cell_height: u32,
    control: PixelRect,
}

impl Layout {
    /// Cell counts must be non-zero and no larger than the window in pixels;
    /// `Config::validate` checks this before a layout is built.
    pub fn new(window_width: u32, window_height: u32, cells_x: usize, cells_y: usize) -> Self {
        let cell_width = window_width / cells_x.max(1) as u32;
        let cell_height = window_height / cells_y.max(1) as u32;

        let control = PixelRect {
            x: window_width.saturating_sub(CONTROL_WIDTH),
            y: window_height.saturating_sub(CONTROL_BOTTOM_OFFSET),
            width: CONTROL_WIDTH.min(window_width),
            height: CONTROL_HEIGHT.min(window_height),
        };

        Self {
            window_width,
            window_height,
            cells_x,
            cells_y,
            cell_width,
            cell_height,
            control,
        }
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// The drawn "Next Generation" button.
    pub fn control(&self) -> PixelRect {
        self.control
    }

    /// Where a press counts as "Next Generation": the button's columns from
    /// its top edge down to the bottom of the window, so the strip under
    /// the button steps too.
    pub fn control_hit_area(&self) -> PixelRect {
        PixelRect {
            height: self.window_height - self.control.y,
            ..self.control
        }
    }

    /// The pixel area covered by cells, excluding the right/bottom margin.
    pub fn grid_bounds(&self) -> PixelRect {
        PixelRect {
            x: 0,
            y: 0,
            width: self.cell_width * self.cells_x as u32,
            height: self.cell_height * self.cells_y as u32,
        }
    }

    /// Pixel rectangle of cell `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> PixelRect {
        PixelRect {
            x: x as u32 * self.cell_width,
            y: y as u32 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Cell-sized outline rectangles tiling the whole window, margin included.
    pub fn outline_rects(&self) -> impl Iterator<Item = PixelRect> + '_ {
        let (w, h) = (self.cell_width.max(1), self.cell_height.max(1));
        (0..self.window_height).step_by(h as usize).flat_map(move |y| {
            (0..self.window_width)
                .step_by(w as usize)
                .map(move |x| PixelRect { x, y, width: w, height: h })
        })
    }

    /// Resolve a pointer position. The control wins where it overlaps cells.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<Hit> {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let (px, py) = (px as u32, py as u32);

        if self.control_hit_area().contains(px, py) {
            return Some(Hit::Control);
        }
        if !self.grid_bounds().contains(px, py) || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }

        let x = (px / self.cell_width) as usize;
        let y = (py / self.cell_height) as usize;
        Some(Hit::Cell {
            x: x.min(self.cells_x - 1),
            y: y.min(self.cells_y - 1),
        })
    }
}
