use crate::error::{Result, TrackerError};
use crate::models::{Activity, WorkoutReport};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tabled::Tabled;

pub mod csv;
pub mod json;
pub mod text;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed multi-line training summary
    #[default]
    Text,
    /// Terminal table
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(TrackerError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Flat, rounded view of a report used by the structured formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct ReportRecord {
    #[tabled(rename = "Activity")]
    pub activity: Activity,
    #[tabled(rename = "Duration (h)")]
    pub duration_h: Decimal,
    #[tabled(rename = "Distance (km)")]
    pub distance_km: Decimal,
    #[tabled(rename = "Speed (km/h)")]
    pub speed_kmh: Decimal,
    #[tabled(rename = "Calories (kcal)")]
    pub calories_kcal: Decimal,
}

impl From<&WorkoutReport> for ReportRecord {
    fn from(report: &WorkoutReport) -> Self {
        ReportRecord {
            activity: report.activity,
            duration_h: round2(report.duration_hours),
            distance_km: round2(report.distance_km),
            speed_kmh: round2(report.speed_kmh),
            calories_kcal: round2(report.calories_kcal),
        }
    }
}

/// Two decimal places, rounded exactly as the text report's `{:.2}`.
/// Non-finite or out-of-range values become zero.
fn round2(value: f64) -> Decimal {
    Decimal::from_str(&format!("{:.2}", value)).unwrap_or_default()
}

/// Render a report in the requested format
pub fn render(report: &WorkoutReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_report(report)),
        OutputFormat::Table => Ok(text::render_table(report)),
        OutputFormat::Json => json::render_report(report),
        OutputFormat::Csv => csv::render_report(report),
    }
}

/// Render a report and write it to `output_path`
pub fn export_report<P: AsRef<Path>>(
    report: &WorkoutReport,
    format: OutputFormat,
    output_path: P,
) -> Result<()> {
    let rendered = render(report, format)?;

    let mut file = std::fs::File::create(&output_path)?;
    file.write_all(rendered.as_bytes())?;

    tracing::info!(
        format = ?format,
        path = %output_path.as_ref().display(),
        "Report exported"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutInput;
    use rust_decimal_macros::dec;
    use tempfile::NamedTempFile;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("TXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(TrackerError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_record_rounding() {
        let report = WorkoutReport::from_input(&WorkoutInput::running(1000, 1.0, 70.0));
        let record = ReportRecord::from(&report);

        assert_eq!(record.activity, Activity::Running);
        assert_eq!(record.duration_h, dec!(1.00));
        assert_eq!(record.distance_km, dec!(0.65));
        assert_eq!(record.calories_kcal, dec!(87.96));
    }

    #[test]
    fn test_round2_non_finite() {
        assert_eq!(round2(f64::NAN), Decimal::ZERO);
        assert_eq!(round2(f64::INFINITY), Decimal::ZERO);
        assert_eq!(round2(294.0).to_string(), "294.00");
    }

    #[test]
    fn test_round2_follows_text_formatting() {
        // 1.015 is stored as 1.01499..., so the text report shows 1.01
        assert_eq!(round2(1.015).to_string(), "1.01");

        for i in 0..1000 {
            let value = 1.005 + f64::from(i) * 0.01;
            assert_eq!(round2(value).to_string(), format!("{:.2}", value));
        }
    }

    #[test]
    fn test_export_report_to_file() {
        let report = WorkoutReport::from_input(&WorkoutInput::swimming(25, 40, 1.0, 70.0));

        let temp_file = NamedTempFile::new().unwrap();
        export_report(&report, OutputFormat::Text, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, report.to_string());
    }
}
