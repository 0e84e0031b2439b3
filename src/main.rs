use eframe::NativeOptions;
use eframe::egui::ViewportBuilder;
use hpc_dashboard::app::HpcApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("ACE HPC Cluster"),
        ..Default::default()
    };
    eframe::run_native(
        "ACE HPC Cluster",
        native_options,
        Box::new(|_cc| Ok(Box::new(HpcApp::default()))),
    )
}
