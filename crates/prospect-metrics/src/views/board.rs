//! Pipeline board: contacts grouped into stage columns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{Stage, classify_stage, is_cadence_exhausted, last_touch, next_pending_touch};
use crate::record::{Field, ProspectRecord};
use crate::types::ContactCard;
use crate::utils::truncate_chars;

/// Four stage columns, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageBoard {
    pub prospecting: Vec<ContactCard>,
    pub responded: Vec<ContactCard>,
    pub scheduled: Vec<ContactCard>,
    pub closed: Vec<ContactCard>,
}

impl StageBoard {
    pub fn build<'a, I>(records: I, today: NaiveDate, preview_chars: usize) -> Self
    where
        I: IntoIterator<Item = &'a ProspectRecord>,
    {
        let mut board = StageBoard::default();
        for record in records {
            let card = contact_card(record, today, preview_chars);
            board.column_mut(card.stage).push(card);
        }
        board
    }

    pub fn column(&self, stage: Stage) -> &[ContactCard] {
        match stage {
            Stage::Prospecting => &self.prospecting,
            Stage::Responded => &self.responded,
            Stage::Scheduled => &self.scheduled,
            Stage::Closed => &self.closed,
        }
    }

    fn column_mut(&mut self, stage: Stage) -> &mut Vec<ContactCard> {
        match stage {
            Stage::Prospecting => &mut self.prospecting,
            Stage::Responded => &mut self.responded,
            Stage::Scheduled => &mut self.scheduled,
            Stage::Closed => &mut self.closed,
        }
    }

    pub fn len(&self) -> usize {
        Stage::ALL.iter().map(|s| self.column(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the board card for one record.
pub fn contact_card(record: &ProspectRecord, today: NaiveDate, preview_chars: usize) -> ContactCard {
    let stage = classify_stage(record);
    let pending = next_pending_touch(record);
    let is_late = pending.as_ref().is_some_and(|p| p.is_late(today));
    let response = record.text(Field::Response);

    ContactCard {
        name: record.display_name(),
        company: record.text(Field::Company),
        title: record.text(Field::Title),
        stage,
        last_touch: last_touch(record),
        is_late,
        awaiting_follow_up: pending.is_none() && is_cadence_exhausted(record),
        pending,
        response_preview: if response.is_empty() {
            None
        } else {
            Some(truncate_chars(&response, preview_chars))
        },
    }
}
