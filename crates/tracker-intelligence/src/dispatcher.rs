// ABOUTME: Builds workouts from raw sensor packages by workout code
// ABOUTME: Checks field arity and assigns raw values positionally to the chosen model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Package Dispatch
//!
//! A tracker sends a short workout code and a flat list of numbers. The
//! dispatcher picks the model for the code and assigns the numbers to its
//! fields in declaration order:
//!
//! ```text
//! RUN  action, duration, weight
//! WLK  action, duration, weight, height
//! SWM  action, duration, weight, pool_length, pool_laps
//! ```
//!
//! An unknown code produces no workout and is reported as
//! `ErrorCode::UnknownWorkoutCode`. A wrong value count is reported as
//! `ErrorCode::ArityMismatch`.

use tracing::debug;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::{SensorPackage, WorkoutType};

use crate::algorithms::{Running, SportsWalking, Swimming, Workout};

/// 2^64, the first float that no longer fits in a `u64`
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Build a workout from a workout code and its raw sensor values
///
/// # Errors
///
/// - `UnknownWorkoutCode` if `workout_code` is not `SWM`, `RUN` or `WLK`
/// - `ArityMismatch` if `data` has the wrong number of values for the code
/// - `InvalidInput` if a count field (steps, strokes, laps) is not a
///   non-negative whole number
///
/// Durations, weights, heights and pool lengths are taken as-is.
///
/// # Example
///
/// ```rust
/// use tracker_intelligence::{read_package, Training};
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert!((workout.distance_km() - 9.75).abs() < 1e-9);
/// ```
pub fn read_package(workout_code: &str, data: &[f64]) -> AppResult<Workout> {
    let workout_type = WorkoutType::from_code(workout_code)
        .ok_or_else(|| AppError::unknown_workout_code(workout_code))?;

    if data.len() != workout_type.arity() {
        return Err(AppError::arity_mismatch(
            workout_code,
            workout_type.arity(),
            data.len(),
        ));
    }

    let workout: Workout = match (workout_type, data) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(count_field("action", action)?, duration, weight).into()
        }
        (WorkoutType::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(count_field("action", action)?, duration, weight, height).into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            Swimming::new(
                count_field("action", action)?,
                duration,
                weight,
                pool_length,
                count_field("pool_laps", pool_laps)?,
            )
            .into()
        }
        _ => {
            return Err(AppError::arity_mismatch(
                workout_code,
                workout_type.arity(),
                data.len(),
            ))
        }
    };

    debug!(
        workout.code = workout_code,
        workout.kind = %workout_type,
        "Sensor package dispatched"
    );

    Ok(workout)
}

/// Build a workout from a deserialized sensor package
///
/// # Errors
///
/// Same as [`read_package`].
pub fn read_sensor_package(package: &SensorPackage) -> AppResult<Workout> {
    read_package(&package.workout_type, &package.data)
}

/// Convert a raw value into a count, rejecting fractions and negatives
fn count_field(field: &'static str, value: f64) -> AppResult<u64> {
    if !value.is_finite() || value < 0.0 || value >= U64_LIMIT || value.fract() != 0.0 {
        return Err(AppError::invalid_input(format!(
            "Field '{field}' must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::algorithms::Training;
    use tracker_core::errors::ErrorCode;

    #[test]
    fn test_unknown_code_produces_no_workout() {
        let error = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutCode);
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let error = read_package("BIKE", &[]).unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownWorkoutCode);
    }

    #[test]
    fn test_arity_mismatch_each_kind() {
        for (code, data) in [
            ("RUN", vec![1.0, 1.0]),
            ("WLK", vec![1.0, 1.0, 1.0]),
            ("SWM", vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
        ] {
            let error = read_package(code, &data).unwrap_err();
            assert_eq!(error.code, ErrorCode::ArityMismatch, "code {code}");
        }
    }

    #[test]
    fn test_positional_assignment() {
        let workout = read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.5, 80.0, 25.0, 40))
        );
        assert_eq!(workout.action(), 720);
    }

    #[test]
    fn test_fractional_count_rejected() {
        let error = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);

        let error = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert!(error.message.contains("pool_laps"));
    }

    #[test]
    fn test_degenerate_duration_accepted() {
        let workout = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap();
        assert!(workout.mean_speed_kmh().is_infinite());
    }

    #[test]
    fn test_sensor_package() {
        let package = SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]);
        let workout = read_sensor_package(&package).unwrap();
        assert_eq!(workout.workout_type(), WorkoutType::SportsWalking);
    }
}
