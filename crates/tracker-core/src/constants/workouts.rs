// ABOUTME: Step lengths and calorie model coefficients for each workout type
// ABOUTME: Running and walking share the default step, swimming uses a stroke length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Default step length in meters (running, sports walking)
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Running calorie model
pub mod running {
    /// Multiplier applied to mean speed
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added after the speed term
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie model
pub mod walking {
    /// Weight term multiplier
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier for the speed-squared over height term
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie model
pub mod swimming {
    /// Stroke length in meters
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Shift added to mean speed
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}
