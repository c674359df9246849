// ABOUTME: Workout sum type wrapping the three formula models
// ABOUTME: Delegates the Training capability set to the wrapped record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracker_core::models::WorkoutType;

use super::{Running, SportsWalking, Swimming, Training};

/// A constructed workout of any supported kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Running(running) => running,
            Self::SportsWalking(walking) => walking,
            Self::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Workout {
    fn workout_type(&self) -> WorkoutType {
        self.as_training().workout_type()
    }

    fn action(&self) -> u64 {
        self.as_training().action()
    }

    fn duration_hours(&self) -> f64 {
        self.as_training().duration_hours()
    }

    fn weight_kg(&self) -> f64 {
        self.as_training().weight_kg()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(running: Running) -> Self {
        Self::Running(running)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walking: SportsWalking) -> Self {
        Self::SportsWalking(walking)
    }
}

impl From<Swimming> for Workout {
    fn from(swimming: Swimming) -> Self {
        Self::Swimming(swimming)
    }
}
