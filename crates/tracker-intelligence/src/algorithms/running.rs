// ABOUTME: Running workout with a linear speed-based calorie model
// ABOUTME: Distance comes from step count with the default step length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracker_core::constants::units::{MIN_IN_H, M_IN_KM};
use tracker_core::constants::workouts::running::{
    CALORIES_MEAN_SPEED_MULTIPLIER, CALORIES_MEAN_SPEED_SHIFT,
};
use tracker_core::models::WorkoutType;

use super::Training;

/// Running workout
///
/// Calories: `(18 x speed + 1.79) x weight / 1000 x duration_minutes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Steps counted
    pub action: u64,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
}

impl Running {
    /// Create a running workout from its sensor values
    #[must_use]
    pub const fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn action(&self) -> u64 {
        self.action
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    // mul_add would round differently from the reference results
    #[allow(clippy::suboptimal_flops)]
    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}
