use anyhow::{Context, Result};

use stakefront_engine::logging::{init_logging, LoggingConfig};
use stakefront_ui::prelude::*;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let deadline_ms = match std::env::var("STAKEFRONT_DEADLINE") {
        Ok(raw) => parse_deadline(&raw).context("STAKEFRONT_DEADLINE")?,
        Err(_) => DEFAULT_DEADLINE_MS,
    };

    let lang = std::env::var("STAKEFRONT_LANG")
        .ok()
        .and_then(|code| Lang::from_code(&code))
        .unwrap_or_default();

    // Startup banner, printed before the window opens.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          STAKEFRONT STUDIO v0.1        ║");
    println!("  ║   sponsor marquee  ·  launch countdown ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    println!("  [1-9] toggle FAQ   [Esc] collapse   [Home] back to top");
    println!();

    log::info!("countdown target {deadline_ms} ms, lang {}", lang.code());

    Application::new()
        .title("Stakefront")
        .size(1280.0, 720.0)
        .lang(lang)
        .deadline_ms(deadline_ms)
        .sponsor("aurora", "Aurora Ventures")
        .sponsor("bastion", "Bastion Capital")
        .sponsor("cobalt", "Cobalt Labs")
        .sponsor("drift", "Driftwood DAO")
        .sponsor("ember", "Ember Node")
        .sponsor("fjord", "Fjord Custody")
        .sponsor("granite", "Granite Validators")
        .run()
}
