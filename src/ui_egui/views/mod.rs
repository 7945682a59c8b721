pub mod block_context_menu;
pub mod day_column;
pub mod header;
mod palette;
pub mod time_grid;

pub use palette::{BlockColors, HeaderPalette, TimeGridPalette};

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const HEADER_HEIGHT: f32 = 44.0;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// Width of each day column so `columns` of them fill `available` next to
/// the time gutter.
pub fn column_width(available: f32, columns: usize) -> f32 {
    if columns == 0 {
        return MIN_COLUMN_WIDTH;
    }
    let count = columns as f32;
    let usable = available - TIME_LABEL_WIDTH - COLUMN_SPACING * count;
    (usable / count).max(MIN_COLUMN_WIDTH)
}
