//! Abgeleitete Kreuzungs-Geometrie: Mittelpunkt, Spur-Versatz, Radius, Bézier-Konstante.

use super::direction::right_of;
use super::Direction;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kreis-Konstante für kubische Bézier-Viertelkreise: `4/3 · (√2 − 1)`.
pub const BEZIER_CIRCLE_KAPPA: f64 = 0.552_284_749_830_793_6;

/// Eingangsmaße der Kreuzung (vom einbettenden Programm vorgegeben).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionDimensions {
    /// Canvas-Breite
    pub canvas_width: f64,
    /// Canvas-Höhe
    pub canvas_height: f64,
    /// Kantenlänge der quadratischen Kreuzungsfläche
    pub intersection_size: f64,
    /// Breite einer Fahrspur
    pub lane_width: f64,
}

/// Unveränderliche Konstanten, aus denen alle Kurven gebaut werden.
///
/// Reine Funktion der [`IntersectionDimensions`]: gleiche Eingaben
/// ergeben bitgleiche Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionGeometry {
    /// Kreuzungsmittelpunkt
    pub center: DVec2,
    /// Halbe Kantenlänge der Kreuzung
    pub half_size: f64,
    /// Halbe Spurbreite (Abstand Spurmitte zur Straßenachse)
    pub lane_offset: f64,
    /// `half_size - lane_offset`
    pub turn_radius: f64,
    /// `BEZIER_CIRCLE_KAPPA * turn_radius`
    pub k: f64,
}

impl IntersectionGeometry {
    /// Leitet die Konstanten aus den Eingangsmaßen ab.
    pub fn derive(dimensions: &IntersectionDimensions) -> Self {
        let center = DVec2::new(dimensions.canvas_width / 2.0, dimensions.canvas_height / 2.0);
        let half_size = dimensions.intersection_size / 2.0;
        let lane_offset = dimensions.lane_width / 2.0;
        let turn_radius = half_size - lane_offset;

        Self {
            center,
            half_size,
            lane_offset,
            turn_radius,
            k: BEZIER_CIRCLE_KAPPA * turn_radius,
        }
    }

    /// Startpunkt P0: Spurmitte der Zufahrt `from` am Kreuzungsrand.
    pub fn entry_point(&self, from: Direction) -> DVec2 {
        let heading = from.heading();
        self.center - heading * self.half_size + right_of(heading) * self.lane_offset
    }

    /// Endpunkt P3: Spurmitte der Ausfahrt `to` am Kreuzungsrand.
    pub fn exit_point(&self, to: Direction) -> DVec2 {
        let heading = to.exit_heading();
        self.center + heading * self.half_size + right_of(heading) * self.lane_offset
    }
}
