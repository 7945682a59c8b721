//! Theme colors for the planner window.
//!
//! Defines the CalendarTheme structure and applies it to an egui context.

use egui::Color32;

use crate::scheduling::StatusTone;

/// Every color the planner paints with
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Weekend column background color
    pub weekend_background: Color32,

    /// Today's column background color
    pub today_background: Color32,

    /// Today's header border and badge color
    pub today_border: Color32,

    /// Regular column background color
    pub day_background: Color32,

    /// Grid line color
    pub day_border: Color32,

    /// Primary text color (headings, block titles)
    pub text_primary: Color32,

    /// Secondary text color (time labels, durations)
    pub text_secondary: Color32,

    /// Block fills per status tone
    pub block_neutral: Color32,
    pub block_accent: Color32,
    pub block_muted: Color32,
    pub block_alert: Color32,

    /// Current time indicator
    pub now_line: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(248, 248, 251),
            today_background: Color32::from_rgb(236, 243, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(110, 110, 110),
            block_neutral: Color32::from_rgb(214, 226, 245),
            block_accent: Color32::from_rgb(120, 170, 250),
            block_muted: Color32::from_rgb(225, 225, 225),
            block_alert: Color32::from_rgb(245, 150, 140),
            now_line: Color32::from_rgb(235, 80, 80),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(45, 55, 75),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            block_neutral: Color32::from_rgb(60, 80, 110),
            block_accent: Color32::from_rgb(60, 110, 190),
            block_muted: Color32::from_rgb(70, 70, 70),
            block_alert: Color32::from_rgb(150, 60, 55),
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn tone_fill(&self, tone: StatusTone) -> Color32 {
        match tone {
            StatusTone::Neutral => self.block_neutral,
            StatusTone::Accent => self.block_accent,
            StatusTone::Muted => self.block_muted,
            StatusTone::Alert => self.block_alert,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CalendarTheme::for_dark_mode(true);
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_each_tone_has_its_own_fill() {
        let theme = CalendarTheme::light();
        let fills = [
            theme.tone_fill(StatusTone::Neutral),
            theme.tone_fill(StatusTone::Accent),
            theme.tone_fill(StatusTone::Muted),
            theme.tone_fill(StatusTone::Alert),
        ];
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
