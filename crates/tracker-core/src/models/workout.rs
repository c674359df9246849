// ABOUTME: Workout type enumeration for the supported training kinds
// ABOUTME: Maps short sensor codes to workout types with their display names and field arity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Workout kinds a tracker can report
///
/// Each kind is identified on the wire by a three-letter code and expects a
/// fixed number of raw sensor values:
///
/// | Kind            | Code  | Values                                        |
/// |-----------------|-------|-----------------------------------------------|
/// | `Running`       | `RUN` | action, duration, weight                      |
/// | `SportsWalking` | `WLK` | action, duration, weight, height              |
/// | `Swimming`      | `SWM` | action, duration, weight, pool length, laps   |
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running, counted in steps
    Running,
    /// Sports walking, counted in steps
    SportsWalking,
    /// Pool swimming, counted in strokes
    Swimming,
}

impl WorkoutType {
    /// All supported workout types
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a workout type by its sensor code
    ///
    /// Codes are matched exactly; `"run"` is not `"RUN"`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(Self::Swimming),
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::SportsWalking),
            _ => None,
        }
    }

    /// Sensor code for this workout type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Type name shown in training summaries
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of raw sensor values this workout type is built from
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::SportsWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::unknown_workout_code(s))
    }
}
