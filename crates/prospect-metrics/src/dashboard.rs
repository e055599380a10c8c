//! The dashboard engine.
//!
//! A [`Dashboard`] holds the configuration and the reference date and turns a
//! record collection into a [`DashboardSummary`]: every aggregate the
//! dashboard renders, recomputed from scratch on each call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::{ConfigValidationError, DashboardConfig};
use crate::dates;
use crate::metrics::{
    channel_volume, compute_kpis, cumulative_timeline, project_goal, scheduling_efficiency,
};
use crate::record::ProspectRecord;
use crate::types::{ChannelCount, GoalProjection, KpiSummary, SearchHit, TimelinePoint};
use crate::views::{FilterOptions, RecordFilter, StageBoard, search};

/// Everything the dashboard shows for one record collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Reference date used for lateness.
    pub today: NaiveDate,
    /// Filter the aggregates were computed under.
    pub filter: RecordFilter,
    /// Selector values, always taken from the unfiltered collection.
    pub filter_options: FilterOptions,
    pub record_count: usize,
    pub filtered_count: usize,
    pub kpis: KpiSummary,
    pub timeline: Vec<TimelinePoint>,
    pub channel_volume: Vec<ChannelCount>,
    pub scheduling_efficiency: Vec<ChannelCount>,
    pub goal: GoalProjection,
    pub board: StageBoard,
}

/// Aggregation engine over prospect records.
///
/// Use [`Dashboard::builder()`] to create one.
///
/// # Example
///
/// ```rust,ignore
/// use prospect_metrics::{Dashboard, DashboardConfig};
///
/// let dashboard = Dashboard::builder()
///     .config(DashboardConfig::builder().company("Acme").build()?)
///     .build()?;
///
/// let summary = dashboard.summarize(&records);
/// println!("{} late follow-ups", summary.kpis.late);
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    today: NaiveDate,
}

static_assertions::assert_impl_all!(Dashboard: Send, Sync);
static_assertions::assert_impl_all!(DashboardSummary: Send, Sync);

impl Dashboard {
    /// Create a new dashboard builder.
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Summarize under the configured filter.
    pub fn summarize(&self, records: &[ProspectRecord]) -> DashboardSummary {
        self.summarize_with(records, &self.config.filter)
    }

    /// Summarize under an explicit filter, ignoring the configured one.
    pub fn summarize_with(&self, records: &[ProspectRecord], filter: &RecordFilter) -> DashboardSummary {
        let start_time = Instant::now();
        info!("Summarizing {} records", records.len());

        let filter_options = FilterOptions::collect(records);
        let filtered = filter.apply(records);
        if !filter.is_empty() {
            debug!(
                "Filter {:?} kept {} of {} records",
                filter,
                filtered.len(),
                records.len()
            );
        }

        let kpis = compute_kpis(filtered.iter().copied(), self.today);
        let timeline = cumulative_timeline(filtered.iter().copied());
        let volume = channel_volume(filtered.iter().copied());
        let efficiency = scheduling_efficiency(filtered.iter().copied());
        let goal = project_goal(&kpis, &self.config.goal);
        let board = StageBoard::build(
            filtered.iter().copied(),
            self.today,
            self.config.response_preview_chars,
        );

        debug!(
            "KPIs: total={} responded={} scheduled={} late={}",
            kpis.total, kpis.responded, kpis.scheduled, kpis.late
        );
        info!(
            "Dashboard ready in {}ms ({} timeline points)",
            start_time.elapsed().as_millis(),
            timeline.len()
        );

        DashboardSummary {
            today: self.today,
            filter: filter.clone(),
            filter_options,
            record_count: records.len(),
            filtered_count: filtered.len(),
            kpis,
            timeline,
            channel_volume: volume,
            scheduling_efficiency: efficiency,
            goal,
            board,
        }
    }

    /// Contact search over the whole collection, regardless of the filter.
    pub fn search(&self, records: &[ProspectRecord], query: &str) -> Vec<SearchHit> {
        let hits = search(
            records,
            query,
            self.config.search_min_chars,
            self.config.search_limit,
        );
        debug!("Search '{}' returned {} hits", query, hits.len());
        hits
    }
}

/// Builder for creating a [`Dashboard`] instance.
#[derive(Debug, Default)]
pub struct DashboardBuilder {
    config: Option<DashboardConfig>,
    today: Option<NaiveDate>,
}

impl DashboardBuilder {
    /// Set the dashboard configuration.
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Pin the reference date. Defaults to the local calendar day.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Build the dashboard.
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Dashboard, ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(Dashboard {
            config,
            today: self.today.unwrap_or_else(dates::today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Channel, Stage};
    use crate::record::Field;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn records() -> Vec<ProspectRecord> {
        vec![
            ProspectRecord::new()
                .with_field(Field::FirstName, "Ana")
                .with_field(Field::Company, "Acme")
                .with_field(Field::LeadSource, "Evento")
                .with_field(Field::ConnectionDate, "01/03/2025")
                .with_field(Field::Touch1, "LinkedIn")
                .with_field(Field::NextTouch, "05/03/2025"),
            ProspectRecord::new()
                .with_field(Field::FirstName, "Bruno")
                .with_field(Field::Company, "Acme")
                .with_field(Field::ConnectionDate, "02/03/2025")
                .with_field(Field::Touch1, "LinkedIn")
                .with_field(Field::Touch2, "email")
                .with_field(Field::Response, "Vamos conversar")
                .with_field(Field::ResponseDate, "04/03/2025")
                .with_field(Field::Outcome, "Agendado")
                .with_field(Field::WinningTouch, "Segundo Touch"),
            ProspectRecord::new()
                .with_field(Field::FirstName, "Carla")
                .with_field(Field::Company, "Globex")
                .with_field(Field::ConnectionDate, "03/03/2025")
                .with_field(Field::Touch1, "whatsapp")
                .with_field(Field::Response, "Sem interesse")
                .with_field(Field::Outcome, "Perdido"),
        ]
    }

    fn dashboard() -> Dashboard {
        Dashboard::builder().today(today()).build().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let dashboard = Dashboard::builder().build().unwrap();
        assert_eq!(dashboard.config(), &DashboardConfig::default());
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let config = DashboardConfig {
            search_limit: 0,
            ..Default::default()
        };
        assert!(Dashboard::builder().config(config).build().is_err());
    }

    #[test]
    fn test_summary_over_all_records() {
        let summary = dashboard().summarize(&records());

        assert_eq!(summary.record_count, 3);
        assert_eq!(summary.filtered_count, 3);
        assert_eq!(summary.kpis.total, 3);
        assert_eq!(summary.kpis.responded, 2);
        assert_eq!(summary.kpis.scheduled, 1);
        assert_eq!(summary.kpis.closed, 1);
        assert_eq!(summary.kpis.late, 1);
        assert_eq!(summary.board.column(Stage::Prospecting).len(), 1);
        assert_eq!(summary.board.column(Stage::Scheduled)[0].name, "Bruno");
        assert_eq!(summary.goal.remaining, 19);

        let efficiency: Vec<(Channel, usize)> = summary
            .scheduling_efficiency
            .iter()
            .map(|c| (c.channel, c.count))
            .collect();
        assert_eq!(efficiency[1], (Channel::Email, 1));

        let last = summary.timeline.last().unwrap();
        assert_eq!((last.connections, last.responses, last.meetings), (3, 1, 1));
    }

    #[test]
    fn test_filter_narrows_aggregates_but_not_options() {
        let filter = RecordFilter {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        let summary = dashboard().summarize_with(&records(), &filter);

        assert_eq!(summary.filtered_count, 2);
        assert_eq!(summary.kpis.total, 2);
        assert_eq!(summary.kpis.closed, 0);
        assert_eq!(summary.filter_options.companies, vec!["Acme", "Globex"]);
        assert_eq!(summary.filter_options.lead_sources, vec!["Evento"]);
    }

    #[test]
    fn test_configured_filter_is_used() {
        let config = DashboardConfig::builder().company("Globex").build().unwrap();
        let dashboard = Dashboard::builder()
            .config(config)
            .today(today())
            .build()
            .unwrap();
        let summary = dashboard.summarize(&records());
        assert_eq!(summary.kpis.total, 1);
        assert_eq!(summary.filter.company.as_deref(), Some("Globex"));
    }

    #[test]
    fn test_search_ignores_filter() {
        let config = DashboardConfig::builder().company("Globex").build().unwrap();
        let dashboard = Dashboard::builder().config(config).build().unwrap();
        let hits = dashboard.search(&records(), "acme");
        assert_eq!(hits.len(), 2);
        assert!(dashboard.search(&records(), "a").is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let summary = dashboard().summarize(&[]);
        assert_eq!(summary.kpis, KpiSummary::default());
        assert!(summary.timeline.is_empty());
        assert!(summary.board.is_empty());
        assert_eq!(summary.channel_volume.len(), 4);
    }
}
