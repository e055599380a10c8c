use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{Channel, Stage};

// ============================================================================
// Per-record Derivations
// ============================================================================

/// The next outreach an in-progress contact is waiting on.
///
/// `date` is `None` both when the scheduling column is empty and when it
/// holds something unparseable; neither case can be called late or on time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTouch {
    pub date: Option<NaiveDate>,
    /// Raw scheduling cell, or the "no date" marker when it was empty.
    pub date_str: String,
    pub label: String,
    pub num: u8,
}

impl PendingTouch {
    /// Strictly before `today`. Undated touches are never late.
    pub fn is_late(&self, today: NaiveDate) -> bool {
        self.date.is_some_and(|d| d < today)
    }
}

/// Highest-numbered non-empty touch slot of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTouch {
    pub num: u8,
    pub label: String,
    pub text: String,
    pub channel: Channel,
}

// ============================================================================
// Aggregates
// ============================================================================

/// Scalar dashboard counters. Ratios are fractions in `0.0..=1.0` and are
/// `0.0` whenever their denominator is zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub total: usize,
    /// Records with any reply text.
    pub responded: usize,
    /// Records whose outcome is a booked meeting.
    pub scheduled: usize,
    pub prospecting: usize,
    /// Responded stage: replied, outcome still open.
    pub active_conversations: usize,
    /// Closed stage: outcome present but not a meeting.
    pub closed: usize,
    /// Outcome present at all (scheduled + closed).
    pub finalized: usize,
    /// Prospecting records whose next touch date has passed.
    pub late: usize,
    pub response_rate: f64,
    pub schedule_from_response_rate: f64,
    pub schedule_from_total_rate: f64,
}

/// One day bucket of the cumulative trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// `DD/MM`
    pub label: String,
    pub connections: usize,
    pub responses: usize,
    pub meetings: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCount {
    pub channel: Channel,
    pub count: usize,
}

/// What it takes to reach a meeting target at the historical conversion rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub target_meetings: u32,
    pub remaining: u32,
    /// Meetings per response used for the projection.
    pub response_to_meeting_rate: f64,
    /// Meetings per contact used for the projection.
    pub contact_to_meeting_rate: f64,
    pub needed_responses: u64,
    pub needed_contacts: u64,
    pub daily_new_contacts: u64,
    pub estimated_touches: f64,
    pub working_days: u32,
}

// ============================================================================
// Views
// ============================================================================

/// One contact as shown on the pipeline board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub company: String,
    pub title: String,
    pub stage: Stage,
    pub last_touch: Option<LastTouch>,
    pub pending: Option<PendingTouch>,
    pub is_late: bool,
    /// In prospecting with every touch sent and nothing pending.
    pub awaiting_follow_up: bool,
    pub response_preview: Option<String>,
}

/// One result of a contact search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Position of the record in the searched collection.
    pub index: usize,
    pub name: String,
    pub company: String,
    pub title: String,
    pub stage: Stage,
    /// Outcome text, or the stage label when no outcome is recorded.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_pending_is_late() {
        let today = ymd(2025, 1, 10);
        let mut pending = PendingTouch {
            date: Some(ymd(2025, 1, 9)),
            date_str: "09/01/2025".to_string(),
            label: "Touch 3".to_string(),
            num: 3,
        };
        assert!(pending.is_late(today));

        pending.date = Some(today);
        assert!(!pending.is_late(today));

        pending.date = None;
        assert!(!pending.is_late(today));
    }

    #[test]
    fn test_kpi_default_is_zeroed() {
        let kpis = KpiSummary::default();
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.response_rate, 0.0);
    }
}
