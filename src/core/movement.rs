//! Schlüssel einer Bewegung durch die Kreuzung (`N->S`, `N->W_right`, ...).

use super::{Direction, TurnType};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Trenner zwischen Zufahrt und Ausfahrt im Textformat.
pub const ARROW: &str = "->";
/// Trenner vor dem Abbiege-Suffix im Textformat.
pub const TURN_DELIMITER: char = '_';

/// Fehler beim Parsen eines textuellen Bewegungsschlüssels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMovementKeyError {
    #[error("Schlüssel '{0}' enthält kein '->'")]
    MissingArrow(String),
    #[error("Unbekannter Richtungs-Code '{0}'")]
    UnknownDirection(String),
    #[error("Unbekannter Abbiege-Typ '{0}'")]
    UnknownTurn(String),
}

/// Eindeutiger Schlüssel einer Bewegung: Zufahrt × Ausfahrt × Abbiege-Typ.
///
/// Nicht jede Kombination ist fahrbar; ob ein Schlüssel existiert,
/// entscheidet allein die [`PathRegistry`](super::PathRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovementKey {
    /// Zufahrt
    pub from: Direction,
    /// Ausfahrt
    pub to: Direction,
    /// Abbiege-Typ
    pub turn: TurnType,
}

impl MovementKey {
    /// Erstellt einen Schlüssel.
    pub fn new(from: Direction, to: Direction, turn: TurnType) -> Self {
        Self { from, to, turn }
    }

    /// Die einzige fahrbare Bewegung von `from` mit Abbiege-Typ `turn`.
    pub fn for_turn(from: Direction, turn: TurnType) -> Self {
        Self::new(from, from.exit_for(turn), turn)
    }

    /// Ob Ausfahrt und Abbiege-Typ zueinander passen (keine Wenden).
    pub fn is_realizable(&self) -> bool {
        self.from != self.to && self.from.exit_for(self.turn) == self.to
    }

    /// Index in die feste Lookup-Tabelle der Registry.
    pub(crate) fn slot(&self) -> usize {
        (self.from.index() * Direction::ALL.len() + self.to.index()) * TurnType::ALL.len()
            + self.turn.index()
    }

    /// Anzahl möglicher Slots (inkl. nicht fahrbarer Kombinationen).
    pub(crate) const SLOT_COUNT: usize =
        Direction::ALL.len() * Direction::ALL.len() * TurnType::ALL.len();
}

impl fmt::Display for MovementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from.letter(), ARROW, self.to.letter())?;
        if let Some(suffix) = self.turn.suffix() {
            write!(f, "{}{}", TURN_DELIMITER, suffix)?;
        }
        Ok(())
    }
}

impl FromStr for MovementKey {
    type Err = ParseMovementKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, rest) = s
            .split_once(ARROW)
            .ok_or_else(|| ParseMovementKeyError::MissingArrow(s.to_string()))?;

        // Ohne Suffix ist es eine Geradeaus-Bewegung
        let (to, turn) = match rest.split_once(TURN_DELIMITER) {
            Some((to, suffix)) => (
                to,
                TurnType::from_suffix(suffix)
                    .ok_or_else(|| ParseMovementKeyError::UnknownTurn(suffix.to_string()))?,
            ),
            None => (rest, TurnType::Straight),
        };

        Ok(Self::new(parse_direction(from)?, parse_direction(to)?, turn))
    }
}

fn parse_direction(code: &str) -> Result<Direction, ParseMovementKeyError> {
    let mut chars = code.chars();
    let direction = match (chars.next(), chars.next()) {
        (Some(letter), None) => Direction::from_letter(letter),
        _ => None,
    };
    direction.ok_or_else(|| ParseMovementKeyError::UnknownDirection(code.to_string()))
}

impl Serialize for MovementKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
