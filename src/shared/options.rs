//! Zentrale Konfiguration der Kreuzungs-Geometrie.
//!
//! `IntersectionOptions` enthält die vom einbettenden Programm vorgegebenen Maße.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{IntersectionDimensions, IntersectionGeometry, DEFAULT_ARC_LENGTH_SEGMENTS};
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite.
pub const CANVAS_WIDTH: f64 = 800.0;
/// Standard-Canvas-Höhe.
pub const CANVAS_HEIGHT: f64 = 800.0;

// ── Kreuzung ────────────────────────────────────────────────────────

/// Standard-Kantenlänge der Kreuzungsfläche.
pub const INTERSECTION_SIZE: f64 = 200.0;
/// Standard-Spurbreite.
pub const LANE_WIDTH: f64 = 40.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Konfigurationswerte.
/// Wird als `intersection_paths.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionOptions {
    /// Maße von Canvas und Kreuzung
    pub dimensions: IntersectionDimensions,
    /// Abtastung für Bogenlängen im Katalog-Export
    #[serde(default = "default_arc_length_segments")]
    pub arc_length_segments: usize,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            dimensions: IntersectionDimensions {
                canvas_width: CANVAS_WIDTH,
                canvas_height: CANVAS_HEIGHT,
                intersection_size: INTERSECTION_SIZE,
                lane_width: LANE_WIDTH,
            },
            arc_length_segments: DEFAULT_ARC_LENGTH_SEGMENTS,
        }
    }
}

/// Serde-Default für `arc_length_segments` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_arc_length_segments() -> usize {
    DEFAULT_ARC_LENGTH_SEGMENTS
}

impl IntersectionOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("intersection_paths"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("intersection_paths.toml")
    }

    /// Leitet die Geometrie-Konstanten aus den Maßen ab.
    pub fn geometry(&self) -> IntersectionGeometry {
        IntersectionGeometry::derive(&self.dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_und_default_feld() {
        let content = r#"
            [dimensions]
            canvas_width = 640.0
            canvas_height = 480.0
            intersection_size = 160.0
            lane_width = 30.0
        "#;
        let opts: IntersectionOptions = toml::from_str(content).expect("TOML gültig");
        assert_eq!(opts.dimensions.canvas_width, 640.0);
        assert_eq!(opts.arc_length_segments, DEFAULT_ARC_LENGTH_SEGMENTS);

        let serialized = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: IntersectionOptions = toml::from_str(&serialized).expect("TOML gültig");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_fehlende_datei_liefert_default() {
        let opts = IntersectionOptions::load_from_file(std::path::Path::new(
            "/nonexistent/intersection_paths.toml",
        ));
        assert_eq!(opts, IntersectionOptions::default());
    }

    #[test]
    fn test_save_und_load() {
        let path = std::env::temp_dir().join(format!(
            "intersection_paths_test_{}.toml",
            std::process::id()
        ));
        let mut opts = IntersectionOptions::default();
        opts.dimensions.lane_width = 25.0;
        opts.save_to_file(&path).expect("Speichern muss klappen");

        let loaded = IntersectionOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_geometry_aus_defaults() {
        let geo = IntersectionOptions::default().geometry();
        assert_eq!(geo.half_size, INTERSECTION_SIZE / 2.0);
        assert_eq!(geo.lane_offset, LANE_WIDTH / 2.0);
    }
}
