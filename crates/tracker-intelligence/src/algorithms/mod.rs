// ABOUTME: Workout formula engine with one implementation per training kind
// ABOUTME: Shared Training capability trait plus the Workout sum type returned by dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Formulas
//!
//! Every workout exposes the same three computations:
//!
//! - distance in kilometers: `action * step_length_m / 1000`
//! - mean speed in km/h: `distance / duration`
//! - calories burned, with a model specific to each workout
//!
//! Distance and speed have default implementations on [`Training`]; each
//! workout only supplies its calorie model, and swimming additionally
//! replaces the speed formula with one based on pool geometry.
//!
//! Inputs are not validated here. A zero duration or height yields an
//! infinite or NaN result rather than an error.

/// Running calorie model
pub mod running;
/// Sports walking calorie model
pub mod walking;
/// Pool swimming speed and calorie models
pub mod swimming;
/// Workout sum type over the three models
pub mod workout;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
pub use workout::Workout;

use tracker_core::constants::units::M_IN_KM;
use tracker_core::constants::workouts::DEFAULT_STEP_LENGTH_M;
use tracker_core::models::WorkoutType;

use crate::summary::InfoMessage;

/// Capability set shared by every workout
pub trait Training {
    /// Which workout this is
    fn workout_type(&self) -> WorkoutType;

    /// Steps or strokes counted by the sensor
    fn action(&self) -> u64;

    /// Workout duration in hours
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered by one step or stroke, in meters
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Distance in kilometers
    fn distance_km(&self) -> f64 {
        self.action() as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> f64;

    /// Compute every statistic once and collect them into a summary
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.workout_type().display_name().to_owned(),
            duration: self.duration_hours(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}
