use super::CalendarApp;
use crate::models::settings::CalendarView;
use crate::scheduling::NavDirection;
use crate::ui_egui::views::header::NavAction;

#[derive(Debug, Default)]
pub(super) struct ShortcutOutcome {
    pub actions: Vec<NavAction>,
    /// Escape pressed while the block menu is open
    pub close_menu: bool,
}

impl CalendarApp {
    /// Keyboard navigation. Drags own the Escape key while they run; see
    /// `PointerSample`.
    pub(super) fn handle_keyboard_shortcuts(&self, ctx: &egui::Context) -> ShortcutOutcome {
        let mut outcome = ShortcutOutcome::default();
        let menu_open = self.interaction.context_menu().is_some();
        let idle = self.interaction.is_idle();
        let typing = ctx.wants_keyboard_input();

        ctx.input(|i| {
            if menu_open && i.key_pressed(egui::Key::Escape) {
                outcome.close_menu = true;
            }

            if !idle || typing {
                return;
            }

            if i.key_pressed(egui::Key::ArrowLeft) {
                outcome.actions.push(NavAction::Navigate(NavDirection::Previous));
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                outcome.actions.push(NavAction::Navigate(NavDirection::Next));
            }
            if i.key_pressed(egui::Key::T) && !i.modifiers.ctrl {
                outcome.actions.push(NavAction::Navigate(NavDirection::Today));
            }
            // D for Day view
            if i.key_pressed(egui::Key::D) && !i.modifiers.ctrl {
                outcome.actions.push(NavAction::SetView(CalendarView::Day));
            }
            // W for Week view
            if i.key_pressed(egui::Key::W) && !i.modifiers.ctrl {
                outcome.actions.push(NavAction::SetView(CalendarView::Week));
            }
        });

        outcome
    }
}
