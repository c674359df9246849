// ABOUTME: Sports walking workout with a height-adjusted calorie model
// ABOUTME: Quadratic speed term in m/s divided by height in meters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracker_core::constants::units::{CM_IN_M, KMH_IN_MSEC, MIN_IN_H};
use tracker_core::constants::workouts::walking::{
    CALORIES_SPEED_HEIGHT_MULTIPLIER, CALORIES_WEIGHT_MULTIPLIER,
};
use tracker_core::models::WorkoutType;

use super::Training;

/// Sports walking workout
///
/// Calories:
/// `(0.035 x weight + speed_ms^2 / height_m x 0.029 x weight) x duration_minutes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Steps counted
    pub action: u64,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    /// Create a walking workout from its sensor values
    #[must_use]
    pub const fn new(action: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::SportsWalking
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
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms * speed_ms / (self.height_cm / CM_IN_M)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * (self.duration_hours * MIN_IN_H)
    }
}
