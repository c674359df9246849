// ABOUTME: Integration tests for training summaries and rendered reports
// ABOUTME: Verifies the exact summary lines and the JSON report shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::formatters::OutputFormat;
use fitness_tracker::models::SensorPackage;
use fitness_tracker::packages::default_packages;
use fitness_tracker::runner::{render, run_packages};
use fitness_tracker::summary::InfoMessage;

const SAMPLE_REPORT: [&str; 3] = [
    "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
     Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
    "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
     Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.",
    "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
     Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.",
];

#[test]
fn test_sample_packages_text_report() {
    let messages = run_packages(&default_packages()).unwrap();
    let report = render(&messages, OutputFormat::Text).unwrap();

    assert_eq!(report, SAMPLE_REPORT.join("\n"));
}

#[test]
fn test_message_matches_display() {
    let messages = run_packages(&default_packages()).unwrap();
    for (message, expected) in messages.iter().zip(SAMPLE_REPORT) {
        assert_eq!(message.get_message(), expected);
        assert_eq!(message.to_string(), expected);
    }
}

#[test]
fn test_sample_packages_json_report() {
    let messages = run_packages(&default_packages()).unwrap();
    let report = render(&messages, OutputFormat::Json).unwrap();

    let parsed: Vec<InfoMessage> = serde_json::from_str(&report).unwrap();
    assert_eq!(parsed.len(), messages.len());
    for (parsed, original) in parsed.iter().zip(&messages) {
        assert_eq!(parsed.training_type, original.training_type);
        assert!((parsed.calories - original.calories).abs() < 1e-9);
    }

    let value: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(value[1]["training_type"], "Running");
    assert_eq!(value[0]["calories"], 336.0);
}

#[test]
fn test_long_duration_formatting() {
    let messages = run_packages(&[SensorPackage::new("RUN", vec![120_000.0, 12.5, 70.0])]).unwrap();
    let line = render(&messages, OutputFormat::Text).unwrap();

    assert!(line.contains("Длительность: 12.500 ч."));
    assert!(line.contains("Дистанция: 78.000 км"));
    assert!(line.contains("Ср. скорость: 6.240 км/ч"));
}

#[test]
fn test_empty_package_list_renders_empty_report() {
    let messages = run_packages(&[]).unwrap();
    assert_eq!(render(&messages, OutputFormat::Text).unwrap(), "");
    assert_eq!(render(&messages, OutputFormat::Json).unwrap(), "[]");
}
