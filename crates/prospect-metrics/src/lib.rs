//! Prospecting Dashboard Library
//!
//! Derives the metrics of a sales-prospecting dashboard from the rows of an
//! outreach spreadsheet.
//!
//! # Overview
//!
//! Each row is one contact moved through a cadence of up to seven touches.
//! Nothing is stored beyond what the sheet holds; every status is derived:
//!
//! - **Classification**: stage, touch channel, next pending touch and lateness
//! - **Metrics**: KPI counters and conversion rates, a cumulative daily trend,
//!   per-channel volume and scheduling efficiency
//! - **Views**: filtering, the stage board and contact search
//! - **Goal Projection**: the outreach needed to reach a meeting target
//! - **Loading & Reporting**: CSV/JSON ingestion and JSON dashboard reports
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use prospect_metrics::{Dashboard, DashboardConfig, LoadOptions, load_records};
//!
//! let records = load_records("leads.csv", &LoadOptions::default())?;
//!
//! let config = DashboardConfig::builder()
//!     .company("Acme")
//!     .target_meetings(30)
//!     .build()?;
//!
//! let summary = Dashboard::builder()
//!     .config(config)
//!     .build()?
//!     .summarize(&records);
//!
//! println!("Response rate: {}", prospect_metrics::percent(summary.kpis.response_rate));
//! ```
//!
//! # Derivation Functions
//!
//! The building blocks are plain total functions and can be used without a
//! [`Dashboard`]:
//!
//! ```rust,ignore
//! use prospect_metrics::classify::{classify_stage, next_pending_touch};
//!
//! let stage = classify_stage(&record);
//! if let Some(pending) = next_pending_touch(&record) {
//!     println!("{} due {}", pending.label, pending.date_str);
//! }
//! ```

pub mod classify;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod loader;
pub mod metrics;
pub mod record;
pub mod reporting;
pub mod types;
pub mod utils;
pub mod views;

// Re-exports for convenient access
pub use classify::{
    Channel, NO_DATE_MARKER, SCHEDULED_MARKERS, Stage, classify_channel, classify_stage,
    has_response, is_cadence_exhausted, is_scheduled, last_touch, next_pending_touch,
};
pub use config::{ConfigValidationError, DashboardConfig, DashboardConfigBuilder, GoalTargets};
pub use dashboard::{Dashboard, DashboardBuilder, DashboardSummary};
pub use error::{DashboardError, Result as DashboardResult, ResultExt};
pub use loader::{LoadOptions, load_records};
pub use metrics::{
    channel_volume, compute_kpis, cumulative_timeline, percent, project_goal,
    scheduling_efficiency,
};
pub use record::{CellValue, Field, ProspectRecord, TOUCH_SEQUENCE, TOUCH_SLOTS, TouchStep};
pub use reporting::{DashboardReport, ReportGenerator, ReportHighlights};
pub use types::{
    ChannelCount, ContactCard, GoalProjection, KpiSummary, LastTouch, PendingTouch, SearchHit,
    TimelinePoint,
};
pub use views::{FilterOptions, RecordFilter, StageBoard, search};
