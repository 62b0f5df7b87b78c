pub mod poller;
pub mod status_tracker;
pub mod validator;

pub use poller::{CycleOutcome, PollState, StatusPoller};
pub use status_tracker::{StatusTracker, parse_status};
pub use validator::check_response;
