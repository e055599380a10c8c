//! Scalar dashboard counters.

use chrono::NaiveDate;

use crate::classify::{Stage, classify_stage, has_response, is_scheduled, next_pending_touch};
use crate::record::ProspectRecord;
use crate::types::KpiSummary;

/// `numerator / denominator`, or `0.0` for an empty denominator.
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Render a fraction as a one-decimal percentage (`0.4` -> `"40.0%"`).
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Fold a record collection into the KPI bundle.
///
/// Stage counts come from [`classify_stage`] alone, so `prospecting +
/// active_conversations + scheduled + closed == total` always holds.
pub fn compute_kpis<'a, I>(records: I, today: NaiveDate) -> KpiSummary
where
    I: IntoIterator<Item = &'a ProspectRecord>,
{
    let mut kpis = KpiSummary::default();

    for record in records {
        kpis.total += 1;
        if has_response(record) {
            kpis.responded += 1;
        }
        if is_scheduled(record) {
            kpis.scheduled += 1;
        }

        match classify_stage(record) {
            Stage::Prospecting => {
                kpis.prospecting += 1;
                let late = next_pending_touch(record).is_some_and(|p| p.is_late(today));
                if late {
                    kpis.late += 1;
                }
            }
            Stage::Responded => kpis.active_conversations += 1,
            Stage::Scheduled => kpis.finalized += 1,
            Stage::Closed => {
                kpis.closed += 1;
                kpis.finalized += 1;
            }
        }
    }

    kpis.response_rate = ratio(kpis.responded, kpis.total);
    kpis.schedule_from_response_rate = ratio(kpis.scheduled, kpis.responded);
    kpis.schedule_from_total_rate = ratio(kpis.scheduled, kpis.total);
    kpis
}
