use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use egui::{vec2, Id, Order, RichText};

use super::CalendarApp;
use crate::scheduling::navigation::range_label;
use crate::scheduling::{header_cells, GridEvent, NavDirection};
use crate::services::planner::PlannerSession;
use crate::services::settings::SettingsService;
use crate::services::store::MemoryStore;
use crate::ui_egui::drag::{DragTracker, PointerSample};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::block_context_menu::render_block_context_menu;
use crate::ui_egui::views::column_width;
use crate::ui_egui::views::header::{render_header_row, render_nav_bar, NavAction};
use crate::ui_egui::views::time_grid::{render_time_grid, GridFrame};
use crate::ui_egui::views::{HeaderPalette, TimeGridPalette};

impl CalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        store: MemoryStore,
        settings_service: SettingsService,
        snapshot_path: Option<PathBuf>,
    ) -> Self {
        let settings = settings_service.get_or_default();
        log::info!(
            "Loaded settings: view={:?}, show_weekends={}, snap={}min",
            settings.current_view,
            settings.show_weekends,
            settings.snap_minutes
        );

        let active_theme = CalendarTheme::for_dark_mode(cc.egui_ctx.style().visuals.dark_mode);
        active_theme.apply_to_context(&cc.egui_ctx);

        let today = Local::now().date_naive();
        let pending_scroll_to_now = settings.scroll_to_now;

        Self {
            session: PlannerSession::new(store, today),
            settings,
            settings_service,
            snapshot_path,
            interaction: Default::default(),
            drag_tracker: DragTracker::new(),
            active_theme,
            pending_scroll_to_now,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Local::now().naive_local();
        let today = now.date();
        self.drag_tracker.begin_frame();

        let mut events = Vec::new();

        let shortcuts = self.handle_keyboard_shortcuts(ctx);
        if shortcuts.close_menu {
            events.push(GridEvent::CloseContextMenu);
        }
        self.apply_nav_actions(shortcuts.actions, today);

        // Menu first so a right-click on another block reopens it this frame
        if let Some(menu) = self.interaction.context_menu() {
            let snapshot = self.session.snapshot();
            let title = snapshot.task(&menu.task_id).map(|task| task.title.as_str());
            events.extend(render_block_context_menu(ctx, menu, title));
        }

        let nav_actions = self.render_nav_panel(ctx);
        self.apply_nav_actions(nav_actions, today);

        self.render_status_bar(ctx);
        events.extend(self.render_task_panel(ctx));
        events.extend(self.render_calendar(ctx, now));
        self.apply_grid_events(events);

        if self.interaction.dragging().is_some() {
            let pointer = self
                .drag_tracker
                .pointer_events(PointerSample::read(ctx));
            self.apply_grid_events(pointer);
        }

        if self.interaction.dragging().is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            self.render_drag_label(ctx);
            ctx.request_repaint();
        }

        if self.settings.now_line_refresh_secs > 0 {
            ctx.request_repaint_after(Duration::from_secs(self.settings.now_line_refresh_secs));
        }
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }

        if let Some(path) = &self.snapshot_path {
            match self.session.store().save_json(path) {
                Ok(()) => log::info!("Saved tasks to {}", path.display()),
                Err(e) => log::error!("Failed to save tasks: {:#}", e),
            }
        }
    }

    pub(super) fn apply_nav_actions(&mut self, actions: Vec<NavAction>, today: NaiveDate) {
        for action in actions {
            match action {
                NavAction::Navigate(direction) => {
                    self.session.navigate(direction, &self.settings, today);
                    if direction == NavDirection::Today {
                        self.pending_scroll_to_now = true;
                    }
                }
                NavAction::SetView(view) => self.settings.current_view = view,
                NavAction::ShowWeekends(show) => self.settings.show_weekends = show,
                NavAction::JumpTo(date) => self.session.jump_to(date),
            }
        }
    }

    fn render_nav_panel(&mut self, ctx: &egui::Context) -> Vec<NavAction> {
        let days = self.session.inputs(&self.settings).visible_days();
        let label = range_label(&days);
        let view = self.settings.current_view;
        let show_weekends = self.settings.show_weekends;
        let view_date = self.session.view_date();

        egui::TopBottomPanel::top("nav_bar")
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let actions = render_nav_bar(ui, &label, view, show_weekends, view_date);
                ui.add_space(4.0);
                actions
            })
            .inner
    }

    fn render_calendar(&mut self, ctx: &egui::Context, now: chrono::NaiveDateTime) -> Vec<GridEvent> {
        let inputs = self.session.inputs(&self.settings);
        let days = inputs.visible_days();
        let cells = header_cells(&days, inputs.selected_date, now.date());
        let metrics = self.metrics();
        let header_palette = HeaderPalette::from_theme(&self.active_theme);
        let grid_palette = TimeGridPalette::from_theme(&self.active_theme);

        let mut events = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let width = column_width(ui.available_width(), days.len());
            events.extend(render_header_row(ui, &cells, width, &header_palette));
            ui.add_space(2.0);

            let frame = GridFrame {
                days: &days,
                snapshot: self.session.snapshot(),
                state: &self.interaction,
                now,
                metrics: &metrics,
                palette: &grid_palette,
                theme: &self.active_theme,
                column_width: width,
            };
            let tracker = &mut self.drag_tracker;
            let scroll_to_now = &mut self.pending_scroll_to_now;

            egui::ScrollArea::vertical()
                .id_source("time_grid_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = vec2(0.0, 0.0);
                    events.extend(render_time_grid(ui, &frame, tracker, scroll_to_now));
                });
        });
        events
    }

    /// Title that follows the pointer while a task is dragged over nothing.
    fn render_drag_label(&self, ctx: &egui::Context) {
        let Some(drag) = self.interaction.dragging() else {
            return;
        };
        if drag.preview.is_some() {
            return;
        }
        let Some(pos) = ctx.pointer_latest_pos() else {
            return;
        };
        let snapshot = self.session.snapshot();
        let Some(task) = snapshot.task(&drag.task_id) else {
            return;
        };

        egui::Area::new(Id::new("drag_label"))
            .fixed_pos(pos + vec2(14.0, 14.0))
            .order(Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(&task.title).strong());
                    ui.label(
                        RichText::new(format!("{} min", task.expected_time))
                            .small()
                            .weak(),
                    );
                });
            });
    }
}
