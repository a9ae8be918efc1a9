pub mod clock;
pub mod session_log;
pub mod tracker;

pub use clock::{Clock, SystemClock};
pub use session_log::SessionLog;
pub use tracker::{Tracker, TrackerState};
