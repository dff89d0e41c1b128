//! Classbell refresh driver - re-resolves the schedule on a fixed cadence and
//! publishes the latest display state to any number of readers.

pub mod driver;
pub mod error;
pub mod source;
pub mod state;

pub use driver::{RefreshDriver, RefreshHandle};
pub use error::RefreshError;
pub use source::{FixedClock, SystemClock, TimeSource};
pub use state::DisplayState;
