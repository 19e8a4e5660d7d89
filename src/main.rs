//! Intersection Paths CLI.
//!
//! Baut den Pfad-Katalog aus einer TOML-Konfiguration und gibt ihn aus.
//!
//! Aufruf: `intersection-paths [CONFIG.toml] [--json]`

use anyhow::Context;
use intersection_paths::{Direction, IntersectionOptions, PathRegistry};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Intersection Paths v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut config_path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            config_path = Some(PathBuf::from(arg));
        }
    }
    let config_path = config_path.unwrap_or_else(IntersectionOptions::config_path);

    let options = IntersectionOptions::load_from_file(&config_path);
    let registry = PathRegistry::build(options.geometry());

    for from in Direction::ALL {
        for movement in registry.available_movements(from) {
            let Some(curve) = registry.get(&movement.key) else {
                continue;
            };
            log::info!(
                "{:<12} Länge {:>8.2}  Richtung {:>7.2}° → {:>7.2}°",
                movement.key.to_string(),
                curve.arc_length(options.arc_length_segments),
                curve.heading(0.0).to_degrees(),
                curve.heading(1.0).to_degrees()
            );
        }
    }

    if json {
        let catalogue = registry.catalogue(options.arc_length_segments);
        let content = serde_json::to_string_pretty(&catalogue)
            .context("Katalog nicht serialisierbar")?;
        println!("{}", content);
    }

    Ok(())
}
