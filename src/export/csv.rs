use super::ReportRecord;
use crate::error::{Result, TrackerError};
use crate::models::WorkoutReport;

/// Header row plus one record of the rounded report values
pub fn render_report(report: &WorkoutReport) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.serialize(ReportRecord::from(report))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| TrackerError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
