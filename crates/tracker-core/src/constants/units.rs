// ABOUTME: Unit conversion constants shared by the workout formulas
// ABOUTME: Meters per kilometer, minutes per hour, centimeters per meter, km/h to m/s
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;

/// Centimeters in one meter
pub const CM_IN_M: f64 = 100.0;

/// Factor converting km/h to m/s (rounded to three places)
pub const KMH_IN_MSEC: f64 = 0.278;
