use livepen::gui;

fn main() {
    // Setup logging
    tracing_subscriber::fmt::init();

    gui::run_app();
}
