//! Touch cadence resolution: what was sent last, and what is due next.

use crate::classify::channel::classify_channel;
use crate::classify::stage::has_response;
use crate::dates::parse_cell_date;
use crate::record::{Field, ProspectRecord, TOUCH_SEQUENCE, TOUCH_SLOTS, touch_label};
use crate::types::{LastTouch, PendingTouch};

/// `date_str` of a pending touch whose scheduling column is empty.
pub const NO_DATE_MARKER: &str = "Data N/D";

/// Find the first unsent touch (2..=7) of a contact still in prospecting.
///
/// Returns `None` when the contact has a response or an outcome, and when
/// every touch up to 7 has been sent. The latter is an unresolved state of
/// its own: the cadence is exhausted but nobody closed the record.
pub fn next_pending_touch(record: &ProspectRecord) -> Option<PendingTouch> {
    if has_response(record) || !record.is_blank(Field::Outcome) {
        return None;
    }

    TOUCH_SEQUENCE
        .iter()
        .find(|step| record.is_blank(step.slot))
        .map(|step| {
            let cell = record.cell(step.date_field);
            let raw = record.text(step.date_field);
            PendingTouch {
                date: parse_cell_date(cell),
                date_str: if raw.is_empty() {
                    NO_DATE_MARKER.to_string()
                } else {
                    raw
                },
                label: step.label.to_string(),
                num: step.num,
            }
        })
}

/// Highest-numbered non-empty touch slot, scanning down from 7.
pub fn last_touch(record: &ProspectRecord) -> Option<LastTouch> {
    TOUCH_SLOTS
        .iter()
        .enumerate()
        .rev()
        .find_map(|(idx, slot)| {
            let text = record.text(*slot);
            if text.is_empty() {
                return None;
            }
            Some(LastTouch {
                num: (idx + 1) as u8,
                label: touch_label(idx + 1),
                channel: classify_channel(&text),
                text,
            })
        })
}

/// Prospecting contact with all seven touches sent and nothing pending.
pub fn is_cadence_exhausted(record: &ProspectRecord) -> bool {
    !has_response(record)
        && record.is_blank(Field::Outcome)
        && TOUCH_SLOTS.iter().all(|slot| !record.is_blank(*slot))
}
