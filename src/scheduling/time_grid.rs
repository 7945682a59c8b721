//! Time grid model.
//!
//! Pure conversions between vertical pixel offsets and minute-of-day values,
//! plus block placement. Every piece of the grid (time labels, hour lines,
//! blocks, ghost, now line) goes through one [`GridMetrics`] so they never
//! drift apart.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::models::settings::Settings;

/// Pixel height of one hour row
pub const ROW_HEIGHT: f32 = 64.0;
/// Drag snapping granularity in minutes
pub const SNAP_INCREMENT: i64 = 15;
/// Smallest rendered block height so short blocks stay clickable
pub const MIN_BLOCK_HEIGHT: f32 = 24.0;
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// `floor(offset / row_height * 60)`. Negative offsets give negative minutes;
/// [`snap_minutes`] clamps them.
pub fn pixel_offset_to_minutes(offset_px: f32, row_height_px: f32) -> i64 {
    (offset_px / row_height_px * 60.0).floor() as i64
}

/// Round to the nearest multiple of `increment` and clamp into
/// `[0, 1440 - increment]` so nothing snaps to 24:00 or later. The increment
/// itself is bounded to `1..=1440`.
pub fn snap_minutes(minutes: i64, increment: i64) -> i64 {
    let increment = increment.clamp(1, MINUTES_PER_DAY);
    let snapped = (minutes as f64 / increment as f64).round() as i64 * increment;
    snapped.clamp(0, MINUTES_PER_DAY - increment)
}

pub fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Wall-clock instant `minutes` after midnight of `date`.
pub fn time_from_minutes(date: NaiveDate, minutes: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
}

/// Vertical placement of a block inside a day column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub top: f32,
    pub height: f32,
}

impl BlockGeometry {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub row_height: f32,
    pub snap_increment: i64,
    pub min_block_height: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            snap_increment: SNAP_INCREMENT,
            min_block_height: MIN_BLOCK_HEIGHT,
        }
    }
}

impl GridMetrics {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            row_height: settings.row_height,
            snap_increment: i64::from(settings.snap_minutes),
            ..Self::default()
        }
    }

    pub fn pixels_per_minute(&self) -> f32 {
        self.row_height / 60.0
    }

    pub fn minutes_to_pixels(&self, minutes: i64) -> f32 {
        // multiply before dividing so whole hours land on exact pixels
        minutes as f32 * self.row_height / 60.0
    }

    pub fn day_height(&self) -> f32 {
        self.minutes_to_pixels(MINUTES_PER_DAY)
    }

    /// Snapped minute-of-day for a pointer offset from the column top.
    pub fn snapped_minutes_at(&self, offset_px: f32) -> i64 {
        snap_minutes(
            pixel_offset_to_minutes(offset_px, self.row_height),
            self.snap_increment,
        )
    }

    pub fn block_geometry(&self, start: NaiveDateTime, end: NaiveDateTime) -> BlockGeometry {
        let duration = (end - start).num_minutes();
        self.geometry_for(minute_of_day(start.time()), duration)
    }

    /// Geometry for a block starting `start_minutes` after midnight.
    pub fn geometry_for(&self, start_minutes: i64, duration_minutes: i64) -> BlockGeometry {
        BlockGeometry {
            top: self.minutes_to_pixels(start_minutes),
            height: (self.minutes_to_pixels(duration_minutes) - 1.0).max(self.min_block_height),
        }
    }
}
