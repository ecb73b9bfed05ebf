pub mod extra;
pub mod total;

pub use extra::{DEFAULT_STANDARD_WORKDAY_MINUTES, ExtraDuration, compute_extra_duration};
pub use total::{aggregate_extra_duration, day_extra, total_extra_minutes};
