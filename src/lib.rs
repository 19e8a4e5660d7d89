//! Intersection Paths Library.
//!
//! Fahrbare Pfade durch eine Vierwege-Kreuzung als kubische Bézier-Kurven:
//! Pfad-Katalog, Kurvenauswertung und Auflösung von Bewegungen.

pub mod core;
pub mod shared;

pub use crate::core::{
    arc_length, heading, position, resolve_key, sample, tangent, ArcLengthTable,
    AvailableMovement, CatalogueEntry, CubicBezier, Direction, IntersectionDimensions,
    IntersectionGeometry, MovementKey, ParseMovementKeyError, PathRegistry, TurnType,
    BEZIER_CIRCLE_KAPPA, DEFAULT_ARC_LENGTH_SEGMENTS,
};
pub use crate::shared::IntersectionOptions;
