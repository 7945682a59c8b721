use crate::scheduling::StatusTone;
use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub struct HeaderPalette {
    pub cell_bg: Color32,
    pub weekend_cell_bg: Color32,
    pub today_cell_bg: Color32,
    pub border: Color32,
    pub selected_border: Color32,
    pub text: Color32,
    pub secondary_text: Color32,
    pub badge_bg: Color32,
    pub badge_text: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            cell_bg: theme.day_background,
            weekend_cell_bg: theme.weekend_background,
            today_cell_bg: theme.today_background,
            border: theme.day_border,
            selected_border: theme.today_border,
            text: theme.text_primary,
            secondary_text: theme.text_secondary,
            badge_bg: theme.today_border,
            badge_text: if theme.is_dark {
                Color32::from_rgb(20, 20, 20)
            } else {
                Color32::from_rgb(245, 245, 245)
            },
        }
    }
}

#[derive(Clone, Copy)]
pub struct TimeGridPalette {
    pub gutter_bg: Color32,
    pub gutter_text: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub now_line: Color32,
    pub ghost_fill: Color32,
    pub ghost_stroke: Color32,
    pub block_text: Color32,
    pub block_secondary_text: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            gutter_bg: blend(theme.calendar_background, theme.day_background, 0.4),
            gutter_text: theme.text_secondary,
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            hour_line: theme.day_border,
            half_hour_line: with_alpha(theme.day_border, 110),
            now_line: theme.now_line,
            ghost_fill: with_alpha(theme.today_border, if theme.is_dark { 80 } else { 50 }),
            ghost_stroke: theme.today_border,
            block_text: theme.text_primary,
            block_secondary_text: theme.text_secondary,
        }
    }
}

/// Fill and outline for one block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockColors {
    pub fill: Color32,
    pub stroke: Color32,
}

impl BlockColors {
    pub fn for_tone(theme: &CalendarTheme, tone: StatusTone) -> Self {
        let fill = theme.tone_fill(tone);
        let toward = if theme.is_dark {
            Color32::WHITE
        } else {
            Color32::BLACK
        };
        Self {
            fill,
            stroke: blend(fill, toward, 0.25),
        }
    }

    /// Faded copy drawn in place of a block that is being moved
    pub fn faded(self) -> Self {
        Self {
            fill: with_alpha(self.fill, 90),
            stroke: with_alpha(self.stroke, 90),
        }
    }
}
