// ABOUTME: Fitness tracker formula engine crate
// ABOUTME: Workout calorie and speed formulas, sensor package dispatch, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Intelligence
//!
//! Turns raw sensor packages into training statistics.
//!
//! - **algorithms**: per-workout distance, speed and calorie formulas
//! - **dispatcher**: builds the right workout from a code and raw values
//! - **summary**: the `InfoMessage` summary and its text rendering

/// Per-workout formula implementations
pub mod algorithms;

/// Workout code dispatch from raw sensor values
pub mod dispatcher;

/// Training summary messages
pub mod summary;

pub use algorithms::{Running, SportsWalking, Swimming, Training, Workout};
pub use dispatcher::{read_package, read_sensor_package};
pub use summary::InfoMessage;
