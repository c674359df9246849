// ABOUTME: Sensor package sources for the tracker CLI
// ABOUTME: Built-in sample packages and JSON package files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;
use tracing::info;
use tracker_core::errors::{AppError, AppResult};
use tracker_core::models::SensorPackage;

/// Sample packages processed when no input file is given
#[must_use]
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Read a JSON array of sensor packages from a file
///
/// ```json
/// [{"workout_type": "RUN", "data": [15000, 1, 75]}]
/// ```
///
/// # Errors
///
/// - `InternalError` if the file cannot be read
/// - `InvalidFormat` if the contents are not a package array
pub fn load_packages(path: &Path) -> AppResult<Vec<SensorPackage>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::from(e).with_details(serde_json::json!({ "path": path.display().to_string() }))
    })?;
    let packages = parse_packages(&raw)?;
    info!(
        path = %path.display(),
        count = packages.len(),
        "Loaded sensor packages"
    );
    Ok(packages)
}

/// Parse a JSON array of sensor packages
///
/// # Errors
///
/// Returns `InvalidFormat` if `raw` is not a package array
pub fn parse_packages(raw: &str) -> AppResult<Vec<SensorPackage>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tracker_core::errors::ErrorCode;

    #[test]
    fn test_default_packages_cover_every_code() {
        let codes: Vec<_> = default_packages()
            .into_iter()
            .map(|package| package.workout_type)
            .collect();
        assert_eq!(codes, ["SWM", "RUN", "WLK"]);
    }

    #[test]
    fn test_parse_rejects_non_numeric_data() {
        let error = parse_packages(r#"[{"workout_type":"RUN","data":["fast"]}]"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_packages("[]").unwrap().is_empty());
    }
}
