//! Per-channel breakdowns.
//!
//! Volume and scheduling efficiency answer different questions (what was
//! sent vs. what actually books meetings) and are folded separately.

use crate::classify::{Channel, classify_channel, is_scheduled, last_touch};
use crate::record::{ProspectRecord, TOUCH_SLOTS};
use crate::types::ChannelCount;

#[derive(Debug, Default, Clone, Copy)]
struct ChannelTally([usize; 4]);

impl ChannelTally {
    fn add(&mut self, channel: Channel) {
        let idx = Channel::ALL
            .iter()
            .position(|c| *c == channel)
            .unwrap_or(Channel::ALL.len() - 1);
        self.0[idx] += 1;
    }

    fn into_counts(self) -> Vec<ChannelCount> {
        Channel::ALL
            .iter()
            .zip(self.0)
            .map(|(channel, count)| ChannelCount {
                channel: *channel,
                count,
            })
            .collect()
    }
}

/// Count every non-empty touch slot of every record by channel.
pub fn channel_volume<'a, I>(records: I) -> Vec<ChannelCount>
where
    I: IntoIterator<Item = &'a ProspectRecord>,
{
    let mut tally = ChannelTally::default();
    for record in records {
        for slot in TOUCH_SLOTS {
            let text = record.text(slot);
            if !text.is_empty() {
                tally.add(classify_channel(&text));
            }
        }
    }
    tally.into_counts()
}

/// Count booked meetings by the channel of the record's last touch.
///
/// Meetings with no touch recorded at all count as [`Channel::Other`].
pub fn scheduling_efficiency<'a, I>(records: I) -> Vec<ChannelCount>
where
    I: IntoIterator<Item = &'a ProspectRecord>,
{
    let mut tally = ChannelTally::default();
    for record in records.into_iter().filter(|r| is_scheduled(r)) {
        let channel = last_touch(record)
            .map(|t| t.channel)
            .unwrap_or(Channel::Other);
        tally.add(channel);
    }
    tally.into_counts()
}
