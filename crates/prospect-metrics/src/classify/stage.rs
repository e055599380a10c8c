//! Pipeline stage classification.
//!
//! Stage is never stored in the sheet; it is recomputed from the `Response`
//! and `Outcome` columns every time. Every aggregate that groups by stage
//! must go through [`classify_stage`] so the views agree with each other.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{Field, ProspectRecord};

/// Lowercase fragments that mark an outcome as a booked meeting.
pub const SCHEDULED_MARKERS: [&str; 2] = ["agend", "sched"];

/// Mutually exclusive pipeline bucket of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// No response and no outcome yet.
    Prospecting,
    /// Replied, outcome still open.
    Responded,
    /// Outcome records a booked meeting.
    Scheduled,
    /// Any other outcome.
    Closed,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 4] = [
        Stage::Prospecting,
        Stage::Responded,
        Stage::Scheduled,
        Stage::Closed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Prospecting => "Prospecting",
            Stage::Responded => "Responded",
            Stage::Scheduled => "Scheduled",
            Stage::Closed => "Closed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a lowercased outcome text records a booked meeting.
pub fn is_scheduled_outcome(outcome_lower: &str) -> bool {
    SCHEDULED_MARKERS.iter().any(|m| outcome_lower.contains(m))
}

/// Whether the record's outcome records a booked meeting.
pub fn is_scheduled(record: &ProspectRecord) -> bool {
    is_scheduled_outcome(&record.lower(Field::Outcome))
}

/// Whether the record has any reply text.
pub fn has_response(record: &ProspectRecord) -> bool {
    !record.is_blank(Field::Response)
}

/// Classify a record into exactly one stage.
///
/// | response | outcome            | stage       |
/// |----------|--------------------|-------------|
/// | empty    | empty              | Prospecting |
/// | present  | empty              | Responded   |
/// | any      | has a sched marker | Scheduled   |
/// | any      | anything else      | Closed      |
pub fn classify_stage(record: &ProspectRecord) -> Stage {
    let outcome = record.lower(Field::Outcome);
    if outcome.is_empty() {
        if has_response(record) {
            Stage::Responded
        } else {
            Stage::Prospecting
        }
    } else if is_scheduled_outcome(&outcome) {
        Stage::Scheduled
    } else {
        Stage::Closed
    }
}
