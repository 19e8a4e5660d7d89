//! Core-Domänentypen: Richtungen, Bewegungsschlüssel, Kreuzungs-Geometrie,
//! Bézier-Auswertung und der Pfad-Katalog.

pub mod bezier;
pub mod direction;
pub mod geometry;
pub mod movement;
/// Katalog aller Pfade durch die Kreuzung
///
/// - PathRegistry: unveränderliche Tabelle Schlüssel → Kurve
/// - CatalogueEntry: serialisierbarer Schnappschuss für Renderer
pub mod path_registry;
pub mod resolver;

pub use bezier::{
    arc_length, heading, position, sample, tangent, ArcLengthTable, CubicBezier,
    DEFAULT_ARC_LENGTH_SEGMENTS,
};
pub use direction::{Direction, TurnType};
pub use geometry::{IntersectionDimensions, IntersectionGeometry, BEZIER_CIRCLE_KAPPA};
pub use movement::{MovementKey, ParseMovementKeyError};
pub use path_registry::{CatalogueEntry, PathRegistry};
pub use resolver::{resolve_key, AvailableMovement};
