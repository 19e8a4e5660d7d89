//! Unveränderlicher Katalog aller fahrbaren Pfade durch die Kreuzung.
//!
//! Wird einmalig aus der [`IntersectionGeometry`] aufgebaut und danach nur
//! noch gelesen. Die Registry kann daher ohne Locks zwischen beliebig vielen
//! Lesern geteilt werden (z.B. hinter einem `Arc`).

use super::{CubicBezier, Direction, IntersectionGeometry, MovementKey, TurnType};
use serde::Serialize;

/// Reihenfolge der Abbieger pro Zufahrt im Katalog.
const TURN_ORDER: [TurnType; 2] = [TurnType::Right, TurnType::Left];

/// Ein Katalogeintrag als serialisierbarer Schnappschuss (für Debug-Renderer / JSON).
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueEntry {
    /// Bewegungsschlüssel im Textformat (`N->W_right`)
    pub key: MovementKey,
    /// Kontrollpunkte P0..P3
    pub control_points: [glam::DVec2; 4],
    /// Approximierte Bogenlänge
    pub arc_length: f64,
}

/// Katalog Bewegungsschlüssel → Kurve.
///
/// Einfügereihenfolge: erst alle Abbieger (pro Zufahrt N, S, E, W jeweils
/// rechts, dann links), danach die Geradeaus-Pfade in derselben Zufahrts-Reihenfolge.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    geometry: IntersectionGeometry,
    entries: Vec<(MovementKey, CubicBezier)>,
    /// Feste Lookup-Tabelle: `MovementKey::slot()` → Index in `entries`
    slots: [Option<usize>; MovementKey::SLOT_COUNT],
}

impl PathRegistry {
    /// Baut den vollständigen Katalog (8 Abbieger + 4 Geradeaus-Pfade).
    pub fn build(geometry: IntersectionGeometry) -> Self {
        let mut registry = Self {
            geometry,
            entries: Vec::with_capacity(12),
            slots: [None; MovementKey::SLOT_COUNT],
        };

        for from in Direction::ALL {
            for turn in TURN_ORDER {
                let key = MovementKey::for_turn(from, turn);
                registry.insert(key, turn_curve(&geometry, from, key.to));
            }
        }
        for from in Direction::ALL {
            let key = MovementKey::for_turn(from, TurnType::Straight);
            registry.insert(key, straight_curve(&geometry, from, key.to));
        }

        if geometry.turn_radius <= 0.0 {
            log::warn!(
                "Spurbreite >= Kreuzungsgröße: Abbiegeradius {:.3} ist nicht positiv",
                geometry.turn_radius
            );
        }
        log::debug!(
            "Pfad-Katalog aufgebaut: {} Einträge (r = {:.3}, k = {:.3})",
            registry.entries.len(),
            geometry.turn_radius,
            geometry.k
        );

        registry
    }

    fn insert(&mut self, key: MovementKey, curve: CubicBezier) {
        self.slots[key.slot()] = Some(self.entries.len());
        self.entries.push((key, curve));
    }

    /// Exakter Lookup. `None` = Pfad nicht modelliert (z.B. Wende).
    pub fn get(&self, key: &MovementKey) -> Option<&CubicBezier> {
        self.slots[key.slot()].map(|idx| &self.entries[idx].1)
    }

    /// Lookup über das Textformat (`"N->W_right"`). Ungültiger Text → `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&CubicBezier> {
        match name.parse::<MovementKey>() {
            Ok(key) => self.get(&key),
            Err(e) => {
                log::debug!("Pfad-Lookup mit ungültigem Schlüssel: {}", e);
                None
            }
        }
    }

    /// Alle Einträge in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (&MovementKey, &CubicBezier)> + '_ {
        self.entries.iter().map(|(key, curve)| (key, curve))
    }

    /// Alle Schlüssel in Einfügereihenfolge.
    pub fn keys(&self) -> impl Iterator<Item = &MovementKey> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Anzahl der Pfade.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Ob der Katalog leer ist (nach `build` nie der Fall).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Die Konstanten, aus denen der Katalog gebaut wurde.
    pub fn geometry(&self) -> &IntersectionGeometry {
        &self.geometry
    }

    /// Serialisierbarer Schnappschuss aller Pfade.
    pub fn catalogue(&self, arc_length_segments: usize) -> Vec<CatalogueEntry> {
        self.iter()
            .map(|(key, curve)| CatalogueEntry {
                key: *key,
                control_points: curve.control_points(),
                arc_length: curve.arc_length(arc_length_segments),
            })
            .collect()
    }
}

/// Abbiegekurve: Steuerpunkte um `k` entlang der Zu- bzw. Ausfahrtsrichtung versetzt.
///
/// Rechtsabbieger ergeben so einen Viertelkreis mit Radius `turn_radius`
/// um die nahe Kreuzungsecke.
fn turn_curve(geometry: &IntersectionGeometry, from: Direction, to: Direction) -> CubicBezier {
    let p0 = geometry.entry_point(from);
    let p3 = geometry.exit_point(to);
    CubicBezier::new(
        p0,
        p0 + from.heading() * geometry.k,
        p3 - to.exit_heading() * geometry.k,
        p3,
    )
}

fn straight_curve(geometry: &IntersectionGeometry, from: Direction, to: Direction) -> CubicBezier {
    CubicBezier::straight(geometry.entry_point(from), geometry.exit_point(to))
}
