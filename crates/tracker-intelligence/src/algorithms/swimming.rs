// ABOUTME: Pool swimming workout with geometry-based speed
// ABOUTME: Stroke count drives distance, pool length times laps drives speed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracker_core::constants::units::M_IN_KM;
use tracker_core::constants::workouts::swimming::{
    CALORIES_MEAN_SPEED_SHIFT, CALORIES_WEIGHT_MULTIPLIER, STROKE_LENGTH_M,
};
use tracker_core::models::WorkoutType;

use super::Training;

/// Pool swimming workout
///
/// Distance is still derived from the stroke count, but mean speed uses the
/// pool length and the number of laps, so the two can disagree.
///
/// Calories: `(speed + 1.1) x 2 x weight x duration_hours`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Strokes counted
    pub action: u64,
    /// Duration in hours
    pub duration_hours: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_laps: u64,
}

impl Swimming {
    /// Create a swimming workout from its sensor values
    #[must_use]
    pub const fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
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

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ignores_stroke_count() {
        let few = Swimming::new(10, 1.0, 80.0, 25.0, 40);
        let many = Swimming::new(10_000, 1.0, 80.0, 25.0, 40);
        assert_eq!(few.mean_speed_kmh().to_bits(), many.mean_speed_kmh().to_bits());
        assert!(many.distance_km() > few.distance_km());
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        let swimming = Swimming::new(1000, 1.0, 80.0, 25.0, 40);
        assert!((swimming.distance_km() - 1.38).abs() < 1e-12);
    }

    #[test]
    fn test_no_laps_keeps_baseline_calories() {
        let swimming = Swimming::new(500, 0.5, 60.0, 50.0, 0);
        assert!((swimming.spent_calories() - 1.1 * 2.0 * 60.0 * 0.5).abs() < 1e-9);
    }
}
