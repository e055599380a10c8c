//! Cumulative daily trend of connections, responses and meetings.
//!
//! Buckets are keyed by calendar day *without the year* and ordered by
//! (month, day). Data spanning more than one year therefore interleaves: 05/01
//! of 2025 lands before 20/12 of 2024. This is the documented behaviour of
//! the dashboard chart and is kept as is.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::classify::{has_response, is_scheduled};
use crate::dates::{day_month_label, parse_cell_date};
use crate::record::{Field, ProspectRecord};
use crate::types::TimelinePoint;

#[derive(Debug, Default, Clone, Copy)]
struct DayCounts {
    connections: usize,
    responses: usize,
    meetings: usize,
}

/// (month, day)
type BucketKey = (u32, u32);

fn bucket_key(date: NaiveDate) -> BucketKey {
    (date.month(), date.day())
}

/// Build the cumulative series.
///
/// A record contributes a connection on its connection date, and - on its
/// response date - a response when it has reply text and a meeting when its
/// outcome is a booked meeting. Records without a parseable date for an
/// event simply do not contribute that event.
pub fn cumulative_timeline<'a, I>(records: I) -> Vec<TimelinePoint>
where
    I: IntoIterator<Item = &'a ProspectRecord>,
{
    let mut buckets: BTreeMap<BucketKey, (String, DayCounts)> = BTreeMap::new();

    for record in records {
        if let Some(date) = parse_cell_date(record.cell(Field::ConnectionDate)) {
            let (_, counts) = buckets
                .entry(bucket_key(date))
                .or_insert_with(|| (day_month_label(date), DayCounts::default()));
            counts.connections += 1;
        }

        if let Some(date) = parse_cell_date(record.cell(Field::ResponseDate)) {
            let (_, counts) = buckets
                .entry(bucket_key(date))
                .or_insert_with(|| (day_month_label(date), DayCounts::default()));
            if has_response(record) {
                counts.responses += 1;
            }
            if is_scheduled(record) {
                counts.meetings += 1;
            }
        }
    }

    let mut running = DayCounts::default();
    buckets
        .into_values()
        .map(|(label, day)| {
            running.connections += day.connections;
            running.responses += day.responses;
            running.meetings += day.meetings;
            TimelinePoint {
                label,
                connections: running.connections,
                responses: running.responses,
                meetings: running.meetings,
            }
        })
        .collect()
}
