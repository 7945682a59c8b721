//! Context menu popup for calendar blocks.
//!
//! Shown as a foreground area pinned to the right-click position. A click on
//! an action or anywhere outside the popup is reported back as a grid event;
//! the coordinator decides what closes it.

use egui::{pos2, Id, Order, RichText};

use crate::scheduling::{ContextMenu, GridEvent, MenuAction};

pub fn render_block_context_menu(
    ctx: &egui::Context,
    menu: &ContextMenu,
    title: Option<&str>,
) -> Option<GridEvent> {
    let mut chosen = None;

    let area = egui::Area::new(Id::new("calendar_block_context_menu"))
        .fixed_pos(pos2(menu.anchor.x, menu.anchor.y))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_min_width(180.0);
                if let Some(title) = title {
                    ui.label(RichText::new(title).strong());
                    ui.separator();
                }
                for action in MenuAction::ALL {
                    if ui.button(action.label()).clicked() {
                        chosen = Some(GridEvent::MenuAction(action));
                    }
                }
            });
        });

    if chosen.is_none() && area.response.clicked_elsewhere() {
        return Some(GridEvent::CloseContextMenu);
    }
    chosen
}
