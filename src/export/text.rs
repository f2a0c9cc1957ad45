use super::ReportRecord;
use crate::models::WorkoutReport;
use tabled::settings::Style;
use tabled::Table;

/// Fixed multi-line training summary
pub fn render_report(report: &WorkoutReport) -> String {
    report.to_string()
}

/// Single-row terminal table of the rounded report values
pub fn render_table(report: &WorkoutReport) -> String {
    let mut table = Table::new([ReportRecord::from(report)]);
    table.with(Style::rounded());
    table.to_string()
}
