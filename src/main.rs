// Event Scheduler Application
// Main entry point

use event_scheduler::ui::SchedulerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Event Scheduler");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Event Scheduler",
        options,
        Box::new(|cc| Ok(Box::new(SchedulerApp::new(cc)))),
    )
}
