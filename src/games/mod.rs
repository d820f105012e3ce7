//! Game implementations built on the engine.

pub mod low_points;
