// ABOUTME: Core types and constants for the fitness tracker
// ABOUTME: Foundation crate with error handling, workout models, formatters, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the fitness
//! tracker. The formula engine and the CLI both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions and per-workout calorie coefficients
//! - **models**: `WorkoutType` and `SensorPackage`
//! - **formatters**: Output format abstraction (text, JSON)

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion and workout coefficient constants
pub mod constants;

/// Workout type and sensor package models
pub mod models;

/// Output format abstraction (text, JSON)
pub mod formatters;
