//! Report generation module.
//!
//! A [`DashboardReport`] wraps a [`DashboardSummary`](crate::DashboardSummary)
//! with run metadata. The same structure backs:
//! - JSON output to stdout (`--json` CLI flag)
//! - JSON file output (`--emit-report` CLI flag)
//! - Programmatic access in library mode
//!
//! # Example
//!
//! ```rust,ignore
//! use prospect_metrics::reporting::ReportGenerator;
//!
//! let report = ReportGenerator::build_report("data/leads.csv", summary);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//!
//! let generator = ReportGenerator::new(PathBuf::from("output"));
//! generator.write_report_to_file(&report, "leads")?;
//! ```

mod generator;

pub use generator::{DashboardReport, ReportGenerator, ReportHighlights};
