fn main() {
    // Initialize logger. Set RUST_LOG to control the level, e.g.
    // RUST_LOG=debug for column-mapping and tagging details.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Karuta Card Tagger");

    if let Err(e) = karuta_tagger::ui::launch_gui() {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
