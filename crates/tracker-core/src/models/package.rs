// ABOUTME: Raw sensor package model as emitted by a fitness tracker
// ABOUTME: Pairs a workout code with its positional sensor values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One package of sensor readings for a single workout
///
/// `data` holds the values positionally in the order the workout type
/// declares them; see [`crate::models::WorkoutType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Three-letter workout code (`SWM`, `RUN`, `WLK`)
    pub workout_type: String,
    /// Raw sensor values
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and its values
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
