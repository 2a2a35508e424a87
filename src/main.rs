use tutorhub::ui::TutorHubApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting TutorHub");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([820.0, 560.0])
            .with_title("TutorHub"),
        ..Default::default()
    };

    eframe::run_native(
        "TutorHub",
        options,
        Box::new(|cc| Ok(Box::new(TutorHubApp::new(cc)))),
    )
}
