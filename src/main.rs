//! Life Wheel entry point
//!
//! Native: prints the default wheel as an SVG document.
//! Usage: `life-wheel [language] [settings.json]`
//!
//! Web: the browser drives `life_wheel::web::LifeWheel` directly.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use life_wheel::export::SvgStyle;
    use life_wheel::{Settings, WheelSession};

    env_logger::init();
    log::info!("Life Wheel (native) starting...");

    let mut args = std::env::args().skip(1);
    let language = args.next();

    let mut settings = match args.next() {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Settings::from_json_str(&json).map_err(|e| e.to_string()))
        {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Cannot load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(language) = language {
        settings.language = language;
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let session = WheelSession::seeded(seed, settings);
    log::info!(
        "Rendering {} areas in {}",
        session.state().len(),
        session.language()
    );
    print!("{}", session.export_svg(&SvgStyle::print()));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
