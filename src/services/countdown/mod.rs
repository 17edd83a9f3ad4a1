mod models;
mod service;
mod ticker;

pub use models::{
    CountdownSnapshot, Milestone, MilestoneCountdown, RemainingDuration, MILLIS_PER_DAY,
    MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
pub use service::{remaining_until, Clock, CountdownService, SystemClock};
pub use ticker::{CountdownTicker, TickerHandle, DEFAULT_TICK_INTERVAL};
