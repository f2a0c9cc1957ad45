//! Workout report assembly and the plain-text training summary

use std::fmt;

use crate::metrics;
use crate::models::{Activity, WorkoutInput, WorkoutReport};

/// Returned by [`show_training_info`] for a label that is not a known activity
pub const UNKNOWN_TRAINING_TYPE: &str = "unknown training type";

impl WorkoutReport {
    /// Derive distance, speed and calories for a workout
    pub fn from_input(input: &WorkoutInput) -> Self {
        let (distance_km, speed_kmh) = if input.activity.is_step_based() {
            (
                metrics::distance(input.action_count),
                metrics::mean_speed(input.action_count, input.duration_hours),
            )
        } else {
            (
                metrics::swimming_distance(input.pool_length_m, input.pool_laps),
                metrics::swimming_mean_speed(
                    input.pool_length_m,
                    input.pool_laps,
                    input.duration_hours,
                ),
            )
        };

        let calories_kcal = match input.activity {
            Activity::Running => metrics::running_spent_calories(
                input.action_count,
                input.weight_kg,
                input.duration_hours,
            ),
            Activity::Walking => metrics::walking_spent_calories(
                input.action_count,
                input.duration_hours,
                input.weight_kg,
                input.height_cm,
            ),
            Activity::Swimming => metrics::swimming_spent_calories(
                input.pool_length_m,
                input.pool_laps,
                input.duration_hours,
                input.weight_kg,
            ),
        };

        tracing::debug!(
            activity = %input.activity,
            distance_km,
            speed_kmh,
            calories_kcal,
            "Workout metrics calculated"
        );

        Self {
            activity: input.activity,
            duration_hours: input.duration_hours,
            distance_km,
            speed_kmh,
            calories_kcal,
        }
    }
}

impl fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories_kcal)
    }
}

/// Build the training summary for a workout described by its activity label.
///
/// Unknown labels yield [`UNKNOWN_TRAINING_TYPE`] instead of a report.
pub fn show_training_info(
    action_count: u32,
    training_type: &str,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
    pool_length_m: u32,
    pool_laps: u32,
) -> String {
    let Some(activity) = Activity::from_label(training_type) else {
        tracing::warn!(training_type, "Unknown training type");
        return UNKNOWN_TRAINING_TYPE.to_string();
    };

    let input = WorkoutInput {
        activity,
        action_count,
        duration_hours,
        weight_kg,
        height_cm,
        pool_length_m,
        pool_laps,
    };

    WorkoutReport::from_input(&input).to_string()
}
