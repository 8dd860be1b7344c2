//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Vitrine");

    let config = match std::env::args().nth(1) {
        Some(path) => match vitrine_app::AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(2);
            }
        },
        None => vitrine_app::AppConfig::default(),
    };

    if let Err(e) = pollster::block_on(vitrine_app::App::run(config)) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
