// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, per-workout calorie coefficients, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain: unit conversions shared by every formula,
//! and the coefficients each workout's calorie model is tuned with.

/// Unit conversion and measurement constants
pub mod units;
/// Per-workout step lengths and calorie coefficients
pub mod workouts;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the tracker binary
    pub const FITNESS_TRACKER: &str = "fitness-tracker";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Output format override (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "TRACKER_OUTPUT_FORMAT";
    /// Path to a JSON file with sensor packages
    pub const PACKAGES_FILE: &str = "TRACKER_PACKAGES_FILE";
}
