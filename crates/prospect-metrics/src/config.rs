//! Configuration types for the prospecting dashboard.
//!
//! This module provides configuration options using the builder pattern.
//! Keyword tables (channels, scheduled markers, the touch cadence) are fixed
//! data in their own modules and are not configurable.

use serde::{Deserialize, Serialize};

use crate::views::RecordFilter;

/// Inputs of the goal projection calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTargets {
    /// Meetings the team wants booked.
    /// Default: 20
    pub target_meetings: u32,

    /// Touches in one full outreach cycle.
    /// Default: 7
    pub touches_per_cycle: u32,

    /// Working days available to reach the target.
    /// Default: 20
    pub working_days: u32,
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self {
            target_meetings: 20,
            touches_per_cycle: 7,
            working_days: 20,
        }
    }
}

/// Configuration for building a dashboard.
///
/// Use [`DashboardConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use prospect_metrics::config::DashboardConfig;
///
/// let config = DashboardConfig::builder()
///     .target_meetings(30)
///     .working_days(15)
///     .company("Acme")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Goal calculator inputs.
    pub goal: GoalTargets,

    /// Which records the aggregates are computed over.
    /// Default: no filtering
    pub filter: RecordFilter,

    /// Shortest search query that returns results.
    /// Default: 2
    pub search_min_chars: usize,

    /// Maximum number of search hits.
    /// Default: 12
    pub search_limit: usize,

    /// Characters of the reply text shown on a board card.
    /// Default: 60
    pub response_preview_chars: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            goal: GoalTargets::default(),
            filter: RecordFilter::default(),
            search_min_chars: 2,
            search_limit: 12,
            response_preview_chars: 60,
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder.
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.goal.touches_per_cycle == 0 {
            return Err(ConfigValidationError::InvalidGoalParameter {
                field: "touches_per_cycle".to_string(),
                value: self.goal.touches_per_cycle,
            });
        }

        if self.goal.working_days == 0 {
            return Err(ConfigValidationError::InvalidGoalParameter {
                field: "working_days".to_string(),
                value: self.goal.working_days,
            });
        }

        if self.search_limit == 0 {
            return Err(ConfigValidationError::InvalidSearchLimit(self.search_limit));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid goal parameter '{field}': {value} (must be at least 1)")]
    InvalidGoalParameter { field: String, value: u32 },

    #[error("Invalid search limit: {0} (must be at least 1)")]
    InvalidSearchLimit(usize),
}

/// Builder for [`DashboardConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    target_meetings: Option<u32>,
    touches_per_cycle: Option<u32>,
    working_days: Option<u32>,
    filter: Option<RecordFilter>,
    company: Option<String>,
    winning_touch: Option<String>,
    lead_source: Option<String>,
    search_min_chars: Option<usize>,
    search_limit: Option<usize>,
    response_preview_chars: Option<usize>,
}

impl DashboardConfigBuilder {
    /// Set the number of meetings to reach.
    pub fn target_meetings(mut self, target: u32) -> Self {
        self.target_meetings = Some(target);
        self
    }

    /// Set the number of touches in one outreach cycle.
    pub fn touches_per_cycle(mut self, touches: u32) -> Self {
        self.touches_per_cycle = Some(touches);
        self
    }

    /// Set the working days available to reach the goal.
    pub fn working_days(mut self, days: u32) -> Self {
        self.working_days = Some(days);
        self
    }

    /// Replace the whole record filter.
    pub fn filter(mut self, filter: RecordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Only include records from this company.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Only include records credited to this winning touch.
    pub fn winning_touch(mut self, touch: impl Into<String>) -> Self {
        self.winning_touch = Some(touch.into());
        self
    }

    /// Only include records from this lead source.
    pub fn lead_source(mut self, source: impl Into<String>) -> Self {
        self.lead_source = Some(source.into());
        self
    }

    /// Set the shortest query that triggers a search.
    pub fn search_min_chars(mut self, chars: usize) -> Self {
        self.search_min_chars = Some(chars);
        self
    }

    /// Set the maximum number of search hits.
    pub fn search_limit(mut self, limit: usize) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// Set how much reply text a board card shows.
    pub fn response_preview_chars(mut self, chars: usize) -> Self {
        self.response_preview_chars = Some(chars);
        self
    }

    /// Build the configuration.
    ///
    /// Individual filter criteria override the matching field of a filter
    /// set through [`filter`](Self::filter).
    pub fn build(self) -> Result<DashboardConfig, ConfigValidationError> {
        let defaults = GoalTargets::default();
        let mut filter = self.filter.unwrap_or_default();
        if self.company.is_some() {
            filter.company = self.company;
        }
        if self.winning_touch.is_some() {
            filter.winning_touch = self.winning_touch;
        }
        if self.lead_source.is_some() {
            filter.lead_source = self.lead_source;
        }

        let config = DashboardConfig {
            goal: GoalTargets {
                target_meetings: self.target_meetings.unwrap_or(defaults.target_meetings),
                touches_per_cycle: self.touches_per_cycle.unwrap_or(defaults.touches_per_cycle),
                working_days: self.working_days.unwrap_or(defaults.working_days),
            },
            filter,
            search_min_chars: self.search_min_chars.unwrap_or(2),
            search_limit: self.search_limit.unwrap_or(12),
            response_preview_chars: self.response_preview_chars.unwrap_or(60),
        };

        config.validate()?;
        Ok(config)
    }
}
