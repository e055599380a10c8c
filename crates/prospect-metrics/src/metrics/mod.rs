//! Aggregations over a (filtered) record collection.

pub mod channels;
pub mod goals;
pub mod kpis;
pub mod timeline;

pub use channels::{channel_volume, scheduling_efficiency};
pub use goals::project_goal;
pub use kpis::{compute_kpis, percent, ratio};
pub use timeline::cumulative_timeline;
