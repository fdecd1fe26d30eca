//! Fitting a grid into the window.

pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const MIN_BLOCK_SIZE: f32 = 1.0;
/// Cells at or below this size are drawn without a grid stroke.
pub const STROKE_THRESHOLD: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub block_size: f32,
}

impl MapViewport {
    /// Largest block size not exceeding `preferred` that fits the grid under
    /// the status bar, centred horizontally.
    pub fn fit(
        screen_width: f32,
        screen_height: f32,
        grid_width: usize,
        grid_height: usize,
        preferred: f32,
    ) -> Self {
        let available_height = (screen_height - STATUS_BAR_HEIGHT).max(0.0);
        let mut block_size = preferred;
        if grid_width > 0 {
            block_size = block_size.min((screen_width / grid_width as f32).floor());
        }
        if grid_height > 0 {
            block_size = block_size.min((available_height / grid_height as f32).floor());
        }
        let block_size = block_size.max(MIN_BLOCK_SIZE);

        let map_width = block_size * grid_width as f32;
        Self {
            origin_x: ((screen_width - map_width) / 2.0).max(0.0).floor(),
            origin_y: STATUS_BAR_HEIGHT,
            block_size,
        }
    }

    pub fn draws_stroke(&self) -> bool {
        self.block_size > STROKE_THRESHOLD
    }

    pub fn cell_origin(&self, x: i32, y: i32) -> (f32, f32) {
        (self.origin_x + x as f32 * self.block_size, self.origin_y + y as f32 * self.block_size)
    }
}
