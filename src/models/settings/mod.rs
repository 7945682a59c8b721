// Settings module
// Grid preferences persisted as TOML

use serde::{Deserialize, Serialize};

use super::ModelError;

/// Which range of days the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Week,
    Day,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub current_view: CalendarView,
    pub show_weekends: bool,
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// Drag snapping granularity in minutes
    pub snap_minutes: u32,
    /// Pixel height of one hour row
    pub row_height: f32,
    /// Seconds between repaints that move the current time line, 0 disables
    pub now_line_refresh_secs: u64,
    /// Scroll the grid to the current time on the first frame
    pub scroll_to_now: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_view: CalendarView::Week,
            show_weekends: true,
            first_day_of_week: 1, // Monday
            snap_minutes: 15,
            row_height: 64.0,
            now_line_refresh_secs: 60,
            scroll_to_now: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.first_day_of_week > 6 {
            return Err(ModelError::InvalidSettings(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            )));
        }

        if self.snap_minutes == 0 || 60 % self.snap_minutes != 0 {
            return Err(ModelError::InvalidSettings(format!(
                "snap_minutes must divide an hour evenly, got {}",
                self.snap_minutes
            )));
        }

        if !(24.0..=240.0).contains(&self.row_height) {
            return Err(ModelError::InvalidSettings(format!(
                "row_height must be between 24 and 240 pixels, got {}",
                self.row_height
            )));
        }

        Ok(())
    }
}
