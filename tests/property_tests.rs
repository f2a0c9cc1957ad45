//! Property-based checks of the calculator and report formatting

use ftracker::{
    distance, mean_speed, show_training_info, swimming_mean_speed, UNKNOWN_TRAINING_TYPE,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_speed_times_duration_is_distance(
        steps in 0u32..1_000_000u32,
        duration in 0.05f64..10.0f64
    ) {
        let reconstructed = mean_speed(steps, duration) * duration;
        prop_assert!((reconstructed - distance(steps)).abs() < 1e-9);
    }

    #[test]
    fn test_swimming_speed_guard(length in 0u32..100u32, laps in 0u32..1000u32) {
        prop_assert_eq!(swimming_mean_speed(length, laps, 0.0), 0.0);
    }

    #[test]
    fn test_unknown_labels_never_report(label in "[a-z]{0,12}") {
        // Canonical labels are capitalized, so lowercase input never matches
        let info = show_training_info(1000, &label, 1.0, 70.0, 175.0, 25, 40);
        prop_assert_eq!(info, UNKNOWN_TRAINING_TYPE);
    }

    #[test]
    fn test_report_has_five_lines(
        steps in 0u32..100_000u32,
        duration in 0.0f64..5.0f64,
        weight in 30.0f64..150.0f64,
        kind in 0usize..3
    ) {
        let label = ["Running", "Walking", "Swimming"][kind];
        let info = show_training_info(steps, label, duration, weight, 175.0, 25, steps % 200);
        prop_assert_eq!(info.lines().count(), 5);
        let expected_prefix = format!("Training type: {}\n", label);
        prop_assert!(info.starts_with(&expected_prefix));
    }
}
