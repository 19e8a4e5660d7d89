//! Himmelsrichtungen der vier Zufahrten und Abbiege-Klassifikation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Seite der Kreuzung, über die ein Fahrzeug einfährt bzw. ausfährt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Nordseite (oberer Canvas-Rand)
    North,
    /// Südseite (unterer Canvas-Rand)
    South,
    /// Ostseite (rechter Canvas-Rand)
    East,
    /// Westseite (linker Canvas-Rand)
    West,
}

impl Direction {
    /// Alle Richtungen in Katalog-Reihenfolge (N, S, E, W).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Ein-Buchstaben-Code für Schlüssel (`N`, `S`, `E`, `W`).
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// Umkehrung von [`Direction::letter`]. Unbekannte Buchstaben → `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// Gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Fahrtrichtung (Einheitsvektor) eines Fahrzeugs, das von dieser Seite einfährt.
    ///
    /// Canvas-Koordinaten: y wächst nach unten. Von Norden kommend fährt
    /// man also in +y.
    pub fn heading(self) -> DVec2 {
        match self {
            Direction::North => DVec2::new(0.0, 1.0),
            Direction::South => DVec2::new(0.0, -1.0),
            Direction::East => DVec2::new(-1.0, 0.0),
            Direction::West => DVec2::new(1.0, 0.0),
        }
    }

    /// Fahrtrichtung beim Verlassen der Kreuzung in Richtung dieser Seite.
    pub fn exit_heading(self) -> DVec2 {
        -self.heading()
    }

    /// Ausfahrt, die von dieser Zufahrt mit `turn` erreicht wird (Rechtsverkehr).
    pub fn exit_for(self, turn: TurnType) -> Self {
        match (self, turn) {
            (from, TurnType::Straight) => from.opposite(),
            (Direction::North, TurnType::Right) => Direction::West,
            (Direction::North, TurnType::Left) => Direction::East,
            (Direction::South, TurnType::Right) => Direction::East,
            (Direction::South, TurnType::Left) => Direction::West,
            (Direction::East, TurnType::Right) => Direction::North,
            (Direction::East, TurnType::Left) => Direction::South,
            (Direction::West, TurnType::Right) => Direction::South,
            (Direction::West, TurnType::Left) => Direction::North,
        }
    }

    /// Position in [`Direction::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

/// Rechts-Normale einer Fahrtrichtung im y-unten-Canvas.
///
/// Die Fahrspur liegt um `lane_offset` in diese Richtung versetzt.
pub fn right_of(heading: DVec2) -> DVec2 {
    DVec2::new(-heading.y, heading.x)
}

/// Art der Bewegung durch die Kreuzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnType {
    /// Geradeaus (kein Suffix im Schlüssel)
    #[default]
    Straight,
    /// Linksabbieger
    Left,
    /// Rechtsabbieger
    Right,
}

impl TurnType {
    /// Alle Typen in Tabellen-Reihenfolge.
    pub const ALL: [TurnType; 3] = [TurnType::Straight, TurnType::Left, TurnType::Right];

    /// Schlüssel-Suffix hinter `_`, bei Geradeaus keins.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            TurnType::Straight => None,
            TurnType::Left => Some("left"),
            TurnType::Right => Some("right"),
        }
    }

    /// Umkehrung von [`TurnType::suffix`] für gesetzte Suffixe.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "left" => Some(TurnType::Left),
            "right" => Some(TurnType::Right),
            _ => None,
        }
    }

    /// Ob die Bewegung eine Kurve (Abbiegen) ist.
    pub fn is_turn(self) -> bool {
        self != TurnType::Straight
    }

    pub(crate) fn index(self) -> usize {
        match self {
            TurnType::Straight => 0,
            TurnType::Left => 1,
            TurnType::Right => 2,
        }
    }
}
