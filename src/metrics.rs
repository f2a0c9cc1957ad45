//! Workout metrics calculator
//!
//! Pure formulas turning raw workout measurements into distance (km),
//! mean speed (km/h) and calories burned (kcal). Every function is
//! deterministic and side-effect free.
//!
//! Degenerate input never produces an error: a zero duration (or a zero
//! height for walking) yields `0.0` for the affected metric.

/// Average step length in meters
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Factor converting km/h to m/s
pub const KMH_IN_MS: f64 = 0.278;
/// Centimeters in a meter
pub const CM_IN_M: f64 = 100.0;

/// Mean speed multiplier for running calories
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
/// Mean speed shift for running calories
pub const RUNNING_SPEED_SHIFT: f64 = 1.79;

/// Body weight multiplier for walking calories
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Speed/height ratio multiplier for walking calories
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Mean speed shift for swimming calories
pub const SWIMMING_SPEED_SHIFT: f64 = 1.1;
/// Body weight multiplier for swimming calories
pub const SWIMMING_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance in kilometers covered by `action_count` steps.
pub fn distance(action_count: u32) -> f64 {
    f64::from(action_count) * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h for step-based activities.
pub fn mean_speed(action_count: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    distance(action_count) / duration_hours
}

/// Calories burned while running.
pub fn running_spent_calories(action_count: u32, weight_kg: f64, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    let speed = mean_speed(action_count, duration_hours);
    (RUNNING_SPEED_MULTIPLIER * speed * RUNNING_SPEED_SHIFT) * weight_kg / M_IN_KM
        * (duration_hours * MIN_IN_H)
}

/// Calories burned while walking.
///
/// Speed is converted to m/s and height to meters before applying the
/// formula. Returns `0.0` when either the duration or the height is zero.
pub fn walking_spent_calories(
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
    height_cm: f64,
) -> f64 {
    if duration_hours == 0.0 || height_cm == 0.0 {
        return 0.0;
    }
    let speed_ms = mean_speed(action_count, duration_hours) * KMH_IN_MS;
    let height_m = height_cm / CM_IN_M;

    (WALKING_WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms.powi(2) / height_m) * WALKING_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_hours
        * MIN_IN_H
}

/// Distance in kilometers swum over `pool_laps` lengths of the pool.
pub fn swimming_distance(pool_length_m: u32, pool_laps: u32) -> f64 {
    f64::from(pool_length_m) * f64::from(pool_laps) / M_IN_KM
}

/// Mean swimming speed in km/h.
pub fn swimming_mean_speed(pool_length_m: u32, pool_laps: u32, duration_hours: f64) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    swimming_distance(pool_length_m, pool_laps) / duration_hours
}

/// Calories burned while swimming.
pub fn swimming_spent_calories(
    pool_length_m: u32,
    pool_laps: u32,
    duration_hours: f64,
    weight_kg: f64,
) -> f64 {
    if duration_hours == 0.0 {
        return 0.0;
    }
    let speed = swimming_mean_speed(pool_length_m, pool_laps, duration_hours);
    (speed + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * weight_kg * duration_hours
}
