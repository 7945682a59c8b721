// Task Calendar
// Desktop entry point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Local;

use task_calendar::services::settings::SettingsService;
use task_calendar::services::store::MemoryStore;
use task_calendar::ui_egui::CalendarApp;

/// Tasks come from the JSON file named on the command line, or demo data.
fn load_store(path: Option<&PathBuf>) -> Result<MemoryStore> {
    match path {
        Some(path) if path.exists() => MemoryStore::load_json(path),
        Some(path) => {
            log::info!("{} does not exist yet, starting empty", path.display());
            Ok(MemoryStore::new())
        }
        None => Ok(MemoryStore::demo(Local::now().date_naive())),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Task Calendar");

    let snapshot_path = std::env::args_os().nth(1).map(PathBuf::from);
    let store = load_store(snapshot_path.as_ref())?;
    let settings_service = SettingsService::from_project_dirs();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Task Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Task Calendar",
        options,
        Box::new(move |cc| {
            Ok(Box::new(CalendarApp::new(
                cc,
                store,
                settings_service,
                snapshot_path,
            )))
        }),
    )
    .map_err(|e| anyhow!("Failed to run the calendar window: {}", e))
}
