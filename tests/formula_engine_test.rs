// ABOUTME: Integration tests for the workout formula engine through the public API
// ABOUTME: Checks distance, speed, and calorie formulas against reference values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::suboptimal_flops)]
#![allow(missing_docs)]

use fitness_tracker::algorithms::{Running, SportsWalking, Swimming, Training};
use fitness_tracker::dispatcher::read_package;

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

// === Reference packages ===

#[test]
fn test_swimming_reference_package() {
    let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();

    // Distance follows strokes (720 x 1.38 m), speed follows the pool (25 m x 40)
    assert_close(workout.distance_km(), 0.9936, "distance");
    assert_close(workout.mean_speed_kmh(), 1.0, "speed");
    assert_close(workout.spent_calories(), 336.0, "calories");
}

#[test]
fn test_running_reference_package() {
    let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert_close(workout.distance_km(), 9.75, "distance");
    assert_close(workout.mean_speed_kmh(), 9.75, "speed");
    assert_close(workout.spent_calories(), 797.805, "calories");
}

#[test]
fn test_walking_reference_package() {
    let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

    assert_close(workout.distance_km(), 5.85, "distance");
    assert_close(workout.mean_speed_kmh(), 5.85, "speed");
    assert_eq!(workout.spent_calories().to_bits(), 349.251_747_525_000_1_f64.to_bits());
}

// === Formula properties ===

#[test]
fn test_running_matches_linear_model() {
    for (action, duration, weight) in [
        (1_u64, 0.25, 50.0),
        (5_000, 0.5, 62.5),
        (12_345, 1.75, 80.0),
        (42_000, 3.5, 95.0),
    ] {
        let running = Running::new(action, duration, weight);
        let distance = action as f64 * 0.65 / 1000.0;
        let speed = distance / duration;
        let calories = (18.0 * speed + 1.79) * weight / 1000.0 * duration * 60.0;

        assert_close(running.distance_km(), distance, "distance");
        assert_close(running.mean_speed_kmh(), speed, "speed");
        assert_close(running.spent_calories(), calories, "calories");
    }
}

#[test]
fn test_swimming_speed_depends_only_on_pool_and_duration() {
    let reference = Swimming::new(0, 2.0, 70.0, 50.0, 60).mean_speed_kmh();
    for action in [1, 100, 2_000, 1_000_000] {
        let swimming = Swimming::new(action, 2.0, 70.0, 50.0, 60);
        assert_eq!(swimming.mean_speed_kmh().to_bits(), reference.to_bits());
    }
    assert_close(reference, 1.5, "speed");
}

#[test]
fn test_walking_speed_term_is_quadratic() {
    let slow = SportsWalking::new(6000, 1.0, 70.0, 175.0);
    let fast = SportsWalking::new(12000, 1.0, 70.0, 175.0);

    let base = 0.035 * 70.0 * 60.0;
    let slow_extra = slow.spent_calories() - base;
    let fast_extra = fast.spent_calories() - base;
    assert!((fast_extra / slow_extra - 4.0).abs() < 1e-9);
}

#[test]
fn test_summary_collects_each_statistic() {
    let running = Running::new(15000, 1.0, 75.0);
    let info = running.show_training_info();

    assert_eq!(info.training_type, "Running");
    assert_close(info.duration, 1.0, "duration");
    assert_close(info.distance, running.distance_km(), "distance");
    assert_close(info.speed, running.mean_speed_kmh(), "speed");
    assert_close(info.calories, running.spent_calories(), "calories");
}

// === Degenerate input ===

#[test]
fn test_zero_duration_propagates_non_finite_values() {
    for (code, data) in [
        ("RUN", vec![15000.0, 0.0, 75.0]),
        ("WLK", vec![9000.0, 0.0, 75.0, 180.0]),
        ("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ] {
        let workout = read_package(code, &data).unwrap();
        assert!(
            !workout.mean_speed_kmh().is_finite(),
            "{code} speed should not be finite"
        );
    }
}
