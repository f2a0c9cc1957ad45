use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Activity types supported by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Running,
    Walking,
    Swimming,
}

impl Activity {
    /// All supported activities, in display order
    pub const ALL: [Activity; 3] = [Activity::Running, Activity::Walking, Activity::Swimming];

    /// Canonical label used in reports and for lookup
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::Walking => "Walking",
            Activity::Swimming => "Swimming",
        }
    }

    /// Resolve a training type label.
    ///
    /// Matching is exact. Russian labels are accepted alongside the
    /// canonical English ones.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Running" | "Бег" => Some(Activity::Running),
            "Walking" | "Ходьба" => Some(Activity::Walking),
            "Swimming" | "Плавание" => Some(Activity::Swimming),
            _ => None,
        }
    }

    /// Whether distance is derived from a step count
    pub fn is_step_based(&self) -> bool {
        matches!(self, Activity::Running | Activity::Walking)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Activity {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Activity::from_label(s).ok_or_else(|| TrackerError::UnknownActivity {
            label: s.to_string(),
        })
    }
}

/// Raw measurements for a single workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutInput {
    /// Activity performed
    pub activity: Activity,

    /// Number of steps (running/walking)
    pub action_count: u32,

    /// Duration in hours
    pub duration_hours: f64,

    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in centimeters (walking only)
    pub height_cm: f64,

    /// Pool length in meters (swimming only)
    pub pool_length_m: u32,

    /// Number of pool lengths swum (swimming only)
    pub pool_laps: u32,
}

impl WorkoutInput {
    /// Running session from a step count
    pub fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            activity: Activity::Running,
            action_count,
            duration_hours,
            weight_kg,
            height_cm: 0.0,
            pool_length_m: 0,
            pool_laps: 0,
        }
    }

    /// Walking session from a step count
    pub fn walking(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            activity: Activity::Walking,
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
            pool_length_m: 0,
            pool_laps: 0,
        }
    }

    /// Pool swimming session
    pub fn swimming(
        pool_length_m: u32,
        pool_laps: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Self {
        Self {
            activity: Activity::Swimming,
            action_count: 0,
            duration_hours,
            weight_kg,
            height_cm: 0.0,
            pool_length_m,
            pool_laps,
        }
    }
}

/// Summary metrics derived from a `WorkoutInput`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub activity: Activity,

    /// Duration in hours
    pub duration_hours: f64,

    /// Distance in kilometers
    pub distance_km: f64,

    /// Mean speed in km/h
    pub speed_kmh: f64,

    /// Calories burned (kcal)
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_labels() {
        for activity in Activity::ALL {
            assert_eq!(Activity::from_label(activity.label()), Some(activity));
            assert_eq!(activity.to_string(), activity.label());
        }
    }

    #[test]
    fn test_localized_labels() {
        assert_eq!(Activity::from_label("Бег"), Some(Activity::Running));
        assert_eq!(Activity::from_label("Ходьба"), Some(Activity::Walking));
        assert_eq!(Activity::from_label("Плавание"), Some(Activity::Swimming));
    }

    #[test]
    fn test_label_matching_is_exact() {
        assert_eq!(Activity::from_label("running"), None);
        assert_eq!(Activity::from_label(" Running"), None);
        assert_eq!(Activity::from_label(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "Cycling".parse::<Activity>().unwrap_err();
        assert!(matches!(err, TrackerError::UnknownActivity { ref label } if label == "Cycling"));
        assert_eq!("Swimming".parse::<Activity>().unwrap(), Activity::Swimming);
    }

    #[test]
    fn test_input_constructors() {
        let walk = WorkoutInput::walking(8000, 1.5, 70.0, 180.0);
        assert_eq!(walk.activity, Activity::Walking);
        assert_eq!(walk.height_cm, 180.0);
        assert_eq!(walk.pool_laps, 0);

        let swim = WorkoutInput::swimming(25, 40, 1.0, 70.0);
        assert_eq!(swim.activity, Activity::Swimming);
        assert_eq!(swim.action_count, 0);
        assert!(!swim.activity.is_step_based());
    }
}
