//! Geteilte Konfiguration für Library und Binary.

pub mod options;

pub use options::IntersectionOptions;
pub use options::{CANVAS_HEIGHT, CANVAS_WIDTH, INTERSECTION_SIZE, LANE_WIDTH};
