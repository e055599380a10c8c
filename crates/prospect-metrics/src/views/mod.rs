//! Presentation-facing views over a record collection: filtering, the
//! pipeline board and contact search.

pub mod board;
pub mod filters;
pub mod search;

pub use board::{StageBoard, contact_card};
pub use filters::{FilterOptions, RecordFilter};
pub use search::search;
