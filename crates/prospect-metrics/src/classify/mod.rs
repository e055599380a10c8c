//! Per-record derivations.
//!
//! Everything here is a pure function of one [`ProspectRecord`](crate::ProspectRecord):
//! the pipeline stage, the channel of a touch, the last touch sent and the
//! next touch due.

pub mod channel;
pub mod stage;
pub mod touches;

pub use channel::{Channel, classify_channel};
pub use stage::{
    SCHEDULED_MARKERS, Stage, classify_stage, has_response, is_scheduled, is_scheduled_outcome,
};
pub use touches::{NO_DATE_MARKER, is_cadence_exhausted, last_touch, next_pending_touch};
