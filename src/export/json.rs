use super::ReportRecord;
use crate::error::Result;
use crate::models::WorkoutReport;

/// Pretty-printed JSON object of the rounded report values
pub fn render_report(report: &WorkoutReport) -> Result<String> {
    let json_data = serde_json::to_string_pretty(&ReportRecord::from(report))?;
    Ok(json_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutInput;

    #[test]
    fn test_render_running_report() {
        let report = WorkoutReport::from_input(&WorkoutInput::running(1000, 1.0, 70.0));
        let content = render_report(&report).unwrap();

        assert!(content.contains("\"activity\": \"Running\""));
        assert!(content.contains("\"distance_km\": \"0.65\""));
        assert!(content.contains("\"calories_kcal\": \"87.96\""));
    }

    #[test]
    fn test_render_is_valid_json() {
        let report = WorkoutReport::from_input(&WorkoutInput::walking(10_000, 1.0, 70.0, 175.0));
        let content = render_report(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["activity"], "Walking");
        assert_eq!(value["speed_kmh"], "6.50");
    }
}
