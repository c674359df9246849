// ABOUTME: Main library entry point for the fitness tracker
// ABOUTME: Wires configuration, logging, package loading, and report rendering around the formula engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! Computes distance, mean speed and calories for running, sports walking
//! and swimming from raw tracker sensor packages, and renders a summary line
//! per workout.
//!
//! ## Example
//!
//! ```rust
//! use fitness_tracker::runner::run_packages;
//! use fitness_tracker::packages::default_packages;
//!
//! let messages = run_packages(&default_packages()).unwrap();
//! assert_eq!(messages.len(), 3);
//! ```

/// Environment configuration and CLI overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Built-in and file-based sensor packages
pub mod packages;

/// Package processing and report rendering
pub mod runner;

pub use tracker_core::errors;
pub use tracker_core::formatters;
pub use tracker_core::models;
pub use tracker_intelligence::{algorithms, dispatcher, summary};
