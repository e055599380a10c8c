use anyhow::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::dashboard::DashboardSummary;
use crate::metrics::percent;
use crate::types::KpiSummary;

// ============================================================================
// Report Types
// ============================================================================

/// Dashboard snapshot plus run metadata, for CLI and library output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// Rates pre-formatted for display
    pub highlights: ReportHighlights,
    /// Every computed aggregate
    pub summary: DashboardSummary,
}

/// Human-readable rates, `"40.0%"` style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHighlights {
    pub response_rate: String,
    pub schedule_from_response_rate: String,
    pub schedule_from_total_rate: String,
}

impl From<&KpiSummary> for ReportHighlights {
    fn from(kpis: &KpiSummary) -> Self {
        Self {
            response_rate: percent(kpis.response_rate),
            schedule_from_response_rate: percent(kpis.schedule_from_response_rate),
            schedule_from_total_rate: percent(kpis.schedule_from_total_rate),
        }
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Writes dashboard reports to an output directory.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./outputs"),
        }
    }
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Wrap a summary into a report stamped with the current local time.
    pub fn build_report(input_file: &str, summary: DashboardSummary) -> DashboardReport {
        DashboardReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            highlights: ReportHighlights::from(&summary.kpis),
            summary,
        }
    }

    /// Write a report as pretty JSON.
    ///
    /// For a base name of `"leads"` the file is `leads_dashboard.json`.
    pub fn write_report_to_file(
        &self,
        report: &DashboardReport,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let report_path = self
            .output_dir
            .join(format!("{}_dashboard.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
