mod lifecycle;
mod shortcuts;
mod sidebar;
mod status_bar;

use std::path::PathBuf;

use crate::models::settings::Settings;
use crate::scheduling::intent::dispatch_all;
use crate::scheduling::{GridEvent, GridMetrics, InteractionState};
use crate::services::planner::PlannerSession;
use crate::services::settings::SettingsService;
use crate::services::store::MemoryStore;
use crate::ui_egui::drag::DragTracker;
use crate::ui_egui::theme::CalendarTheme;

pub struct CalendarApp {
    /// Store plus the host's date and selection state
    session: PlannerSession<MemoryStore>,
    settings: Settings,
    settings_service: SettingsService,
    /// Where the task snapshot is written on exit, if anywhere
    snapshot_path: Option<PathBuf>,
    /// Drag and context-menu state of the grid
    interaction: InteractionState,
    drag_tracker: DragTracker,
    active_theme: CalendarTheme,
    /// Center the grid on the current time next frame
    pending_scroll_to_now: bool,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl CalendarApp {
    fn metrics(&self) -> GridMetrics {
        GridMetrics::from_settings(&self.settings)
    }

    /// Run grid events through the coordinator and hand the resulting
    /// intents to the session, in order.
    fn apply_grid_events(&mut self, events: Vec<GridEvent>) {
        let metrics = self.metrics();
        for event in events {
            let intents = self
                .interaction
                .update(event, &self.session.snapshot(), &metrics);
            dispatch_all(intents, &mut self.session);
        }
    }
}
