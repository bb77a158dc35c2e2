fn main() -> Result<(), eframe::Error> {
    // Set up logging; RUST_LOG=graph_editor=debug shows skipped gated actions
    env_logger::init();

    graph_editor::run_app()
}
