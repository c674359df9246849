// ABOUTME: Core data models shared across the fitness tracker crates
// ABOUTME: Re-exports workout type and sensor package definitions

/// Workout type enumeration with codes and arities
pub mod workout;
/// Raw sensor package as received from a tracker
pub mod package;

pub use package::SensorPackage;
pub use workout::WorkoutType;
