// ABOUTME: Runs sensor packages through the formula engine and renders the report
// ABOUTME: Processes packages in order and stops at the first failing package
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, info, warn};
use tracker_core::errors::AppResult;
use tracker_core::formatters::{format_output, OutputFormat};
use tracker_core::models::SensorPackage;
use tracker_intelligence::{read_sensor_package, InfoMessage, Training};

use crate::config::TrackerConfig;
use crate::packages::{default_packages, load_packages};

/// Load the configured packages, compute their summaries and render the report
///
/// # Errors
///
/// Returns the first error from loading, dispatching or rendering
pub fn run(config: &TrackerConfig) -> AppResult<String> {
    let packages = config
        .packages_file
        .as_deref()
        .map_or_else(|| Ok(default_packages()), load_packages)?;
    let messages = run_packages(&packages)?;
    info!(
        packages = messages.len(),
        format = %config.output_format,
        "Training report ready"
    );
    render(&messages, config.output_format)
}

/// Compute the summary for every package, in order
///
/// # Errors
///
/// Returns the first dispatch error; later packages are not processed.
pub fn run_packages(packages: &[SensorPackage]) -> AppResult<Vec<InfoMessage>> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| -> AppResult<InfoMessage> {
            let workout = read_sensor_package(package).map_err(|error| {
                warn!(
                    package.index = index,
                    package.code = %package.workout_type,
                    error.code = ?error.code,
                    "Rejected sensor package"
                );
                error.with_detail("package_index", index)
            })?;
            let message = workout.show_training_info();
            debug!(
                package.index = index,
                distance_km = message.distance,
                calories = message.calories,
                "Computed training summary"
            );
            Ok(message)
        })
        .collect()
}

/// Render summaries in the requested output format
///
/// # Errors
///
/// Returns `SerializationError` if JSON rendering fails
pub fn render(messages: &[InfoMessage], format: OutputFormat) -> AppResult<String> {
    Ok(format_output(messages, format)?.data)
}
