//! Auflösung von Bewegungen (Zufahrt, Ausfahrt, Abbiege-Typ) auf Katalog-Pfade.

use super::{CubicBezier, Direction, MovementKey, PathRegistry, TurnType};

/// Eine von einer Zufahrt aus mögliche Bewegung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableMovement {
    /// Ausfahrt
    pub to: Direction,
    /// Abbiege-Typ
    pub turn: TurnType,
    /// Aufgelöster Katalog-Schlüssel
    pub key: MovementKey,
}

/// Bildet den Katalog-Schlüssel. Ob der Pfad existiert, prüft erst [`PathRegistry::lookup`].
pub fn resolve_key(from: Direction, to: Direction, turn: TurnType) -> MovementKey {
    MovementKey::new(from, to, turn)
}

impl PathRegistry {
    /// `resolve_key` + `get`. `None` ist das einzige Fehlersignal.
    pub fn lookup(&self, from: Direction, to: Direction, turn: TurnType) -> Option<&CubicBezier> {
        self.get(&resolve_key(from, to, turn))
    }

    /// Alle Bewegungen ab `from` in Katalog-Reihenfolge.
    ///
    /// Jeder Aufruf liefert einen neuen Iterator ohne gemeinsamen Zustand.
    pub fn available_movements(
        &self,
        from: Direction,
    ) -> impl Iterator<Item = AvailableMovement> + '_ {
        self.keys()
            .filter(move |key| key.from == from)
            .map(|key| AvailableMovement {
                to: key.to,
                turn: key.turn,
                key: *key,
            })
    }
}
