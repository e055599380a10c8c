//! Goal projection: how much outreach a meeting target still needs.

use crate::config::GoalTargets;
use crate::types::{GoalProjection, KpiSummary};

/// Response -> meeting rate assumed when nobody has responded yet.
pub const DEFAULT_RESPONSE_TO_MEETING_RATE: f64 = 0.20;
/// Contact -> meeting rate assumed for an empty collection.
pub const DEFAULT_CONTACT_TO_MEETING_RATE: f64 = 0.05;
/// Fallback multipliers when the historical rate is zero.
const RESPONSES_PER_MEETING_FALLBACK: u64 = 5;
const CONTACTS_PER_MEETING_FALLBACK: u64 = 20;

fn needed_for(remaining: u32, rate: f64, fallback: u64) -> u64 {
    if rate > 0.0 {
        (remaining as f64 / rate).ceil() as u64
    } else {
        remaining as u64 * fallback
    }
}

/// Project the effort needed to reach `targets.target_meetings` from the
/// conversion rates observed in `kpis`.
pub fn project_goal(kpis: &KpiSummary, targets: &GoalTargets) -> GoalProjection {
    let remaining = targets
        .target_meetings
        .saturating_sub(u32::try_from(kpis.scheduled).unwrap_or(u32::MAX));

    let response_to_meeting_rate = if kpis.responded > 0 {
        kpis.scheduled as f64 / kpis.responded as f64
    } else {
        DEFAULT_RESPONSE_TO_MEETING_RATE
    };
    let contact_to_meeting_rate = if kpis.total > 0 {
        kpis.scheduled as f64 / kpis.total as f64
    } else {
        DEFAULT_CONTACT_TO_MEETING_RATE
    };

    let needed_responses = needed_for(
        remaining,
        response_to_meeting_rate,
        RESPONSES_PER_MEETING_FALLBACK,
    );
    let needed_contacts = needed_for(
        remaining,
        contact_to_meeting_rate,
        CONTACTS_PER_MEETING_FALLBACK,
    );

    let working_days = targets.working_days.max(1);
    let daily_new_contacts = needed_contacts.div_ceil(working_days as u64);
    let estimated_touches = needed_contacts as f64 * (targets.touches_per_cycle as f64 / 2.0);

    GoalProjection {
        target_meetings: targets.target_meetings,
        remaining,
        response_to_meeting_rate,
        contact_to_meeting_rate,
        needed_responses,
        needed_contacts,
        daily_new_contacts,
        estimated_touches,
        working_days: targets.working_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kpis(total: usize, responded: usize, scheduled: usize) -> KpiSummary {
        KpiSummary {
            total,
            responded,
            scheduled,
            ..Default::default()
        }
    }

    #[test]
    fn test_projection_from_history() {
        let projection = project_goal(&kpis(100, 40, 10), &GoalTargets::default());
        assert_eq!(projection.remaining, 10);
        assert_eq!(projection.needed_responses, 40); // 10 / 0.25
        assert_eq!(projection.needed_contacts, 100); // 10 / 0.10
        assert_eq!(projection.daily_new_contacts, 5); // 100 / 20 days
        assert_eq!(projection.estimated_touches, 350.0); // 100 * 7 / 2
    }

    #[test]
    fn test_goal_already_met() {
        let projection = project_goal(&kpis(50, 30, 25), &GoalTargets::default());
        assert_eq!(projection.remaining, 0);
        assert_eq!(projection.needed_contacts, 0);
        assert_eq!(projection.daily_new_contacts, 0);
    }

    #[test]
    fn test_defaults_without_history() {
        let projection = project_goal(&kpis(0, 0, 0), &GoalTargets::default());
        assert_eq!(projection.response_to_meeting_rate, DEFAULT_RESPONSE_TO_MEETING_RATE);
        assert_eq!(projection.contact_to_meeting_rate, DEFAULT_CONTACT_TO_MEETING_RATE);
        assert_eq!(projection.needed_responses, 100); // 20 / 0.2
        assert_eq!(projection.needed_contacts, 400); // 20 / 0.05
    }

    #[test]
    fn test_zero_rates_use_fallback_multipliers() {
        // Responses but no meetings yet: observed rates are zero
        let projection = project_goal(&kpis(30, 6, 0), &GoalTargets::default());
        assert_eq!(projection.response_to_meeting_rate, 0.0);
        assert_eq!(projection.needed_responses, 20 * 5);
        assert_eq!(projection.needed_contacts, 20 * 20);
    }

    #[test]
    fn test_daily_effort_rounds_up() {
        let targets = GoalTargets {
            target_meetings: 7,
            touches_per_cycle: 4,
            working_days: 3,
        };
        let projection = project_goal(&kpis(10, 5, 1), &targets);
        assert_eq!(projection.needed_contacts, 60);
        assert_eq!(projection.daily_new_contacts, 20);
        assert_eq!(projection.estimated_touches, 120.0);
    }
}
