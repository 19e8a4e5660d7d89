//! Kubische Bézier-Kurven und ihre Auswertung (Position, Tangente, Bogenlänge).
//!
//! Alle Funktionen sind rein und zustandslos. `t` wird nicht geklemmt:
//! Werte außerhalb von [0, 1] extrapolieren mit demselben Polynom.

use glam::DVec2;
use serde::Serialize;

/// Standard-Abtastung für [`arc_length`].
pub const DEFAULT_ARC_LENGTH_SEGMENTS: usize = 100;

/// Ein gerichteter Pfad durch die Kreuzung, definiert über vier Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    /// Startpunkt (Zufahrt)
    pub p0: DVec2,
    /// Erster Steuerpunkt
    pub p1: DVec2,
    /// Zweiter Steuerpunkt
    pub p2: DVec2,
    /// Endpunkt (Ausfahrt)
    pub p3: DVec2,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus vier Kontrollpunkten in Fahrtrichtung.
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Degenerierte Kurve auf der Strecke `start → end` mit Steuerpunkten bei 1/3 und 2/3.
    ///
    /// Dadurch ist die Ableitung konstant `end - start` (gleichförmige Bewegung).
    pub fn straight(start: DVec2, end: DVec2) -> Self {
        let delta = end - start;
        Self::new(start, start + delta / 3.0, start + delta * (2.0 / 3.0), end)
    }

    /// Kontrollpunkte in Kurvenreihenfolge.
    pub fn control_points(&self) -> [DVec2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Siehe [`position`].
    pub fn position(&self, t: f64) -> DVec2 {
        position(self, t)
    }

    /// Siehe [`tangent`].
    pub fn tangent(&self, t: f64) -> DVec2 {
        tangent(self, t)
    }

    /// Siehe [`heading`].
    pub fn heading(&self, t: f64) -> f64 {
        heading(self, t)
    }

    /// Siehe [`arc_length`].
    pub fn arc_length(&self, segments: usize) -> f64 {
        arc_length(Some(self), segments)
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn position(curve: &CubicBezier, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * curve.p0 + 3.0 * inv2 * t * curve.p1 + 3.0 * inv * t2 * curve.p2 + t2 * t * curve.p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
///
/// Nicht normiert; die Länge entspricht der Parametergeschwindigkeit.
pub fn tangent(curve: &CubicBezier, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (curve.p1 - curve.p0)
        + 6.0 * inv * t * (curve.p2 - curve.p1)
        + 3.0 * t * t * (curve.p3 - curve.p2)
}

/// Fahrtrichtung als Winkel `atan2(dy, dx)` (Radiant, Canvas-Koordinaten).
pub fn heading(curve: &CubicBezier, t: f64) -> f64 {
    let d = tangent(curve, t);
    d.y.atan2(d.x)
}

/// Approximierte Kurvenlänge über `segments` Polylinien-Abschnitte.
///
/// Fehlende Kurve → 0.0. `segments == 0` wird wie 1 behandelt.
pub fn arc_length(curve: Option<&CubicBezier>, segments: usize) -> f64 {
    let Some(curve) = curve else {
        return 0.0;
    };
    let segments = segments.max(1);
    let mut length = 0.0;
    let mut prev = curve.p0;
    for i in 1..=segments {
        let t = i as f64 / segments as f64;
        let p = position(curve, t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Tastet die Kurve an `segments + 1` gleichverteilten Parametern ab.
pub fn sample(curve: &CubicBezier, segments: usize) -> Vec<DVec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| position(curve, i as f64 / segments as f64))
        .collect()
}

/// Lookup-Tabelle kumulierter Bogenlängen für Bewegung mit konstanter Geschwindigkeit.
///
/// Bildet eine gefahrene Distanz auf den Kurvenparameter `t` ab.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    curve: CubicBezier,
    /// `lengths[i]` = Polylinien-Länge bis `t = i / samples`
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Baut die Tabelle mit `samples` Abschnitten (mindestens 1).
    pub fn new(curve: &CubicBezier, samples: usize) -> Self {
        let samples = samples.max(1);
        let mut lengths = Vec::with_capacity(samples + 1);
        let mut prev = curve.p0;
        let mut cumulative = 0.0;
        lengths.push(0.0);
        for i in 1..=samples {
            let p = position(curve, i as f64 / samples as f64);
            cumulative += prev.distance(p);
            lengths.push(cumulative);
            prev = p;
        }
        Self {
            curve: *curve,
            lengths,
        }
    }

    /// Gesamtlänge (identisch mit `arc_length` bei gleicher Abtastung).
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Kurvenparameter nach `distance` Längeneinheiten, geklemmt auf [0, 1].
    pub fn t_at_distance(&self, distance: f64) -> f64 {
        let total = self.total_length();
        if total <= f64::EPSILON || distance <= 0.0 {
            return 0.0;
        }
        if distance >= total {
            return 1.0;
        }

        let samples = self.lengths.len() - 1;
        let idx = self
            .lengths
            .partition_point(|&len| len < distance)
            .clamp(1, samples);

        let len_before = self.lengths[idx - 1];
        let len_after = self.lengths[idx];
        let frac = if (len_after - len_before).abs() > f64::EPSILON {
            (distance - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        ((idx - 1) as f64 + frac) / samples as f64
    }

    /// Position nach `distance` Längeneinheiten entlang der Kurve.
    pub fn position_at_distance(&self, distance: f64) -> DVec2 {
        position(&self.curve, self.t_at_distance(distance))
    }
}

#[cfg(test)]
mod tests;
