use chrono::{DateTime, Utc};
use classbell_schedule::{DisplayMessage, ResolvedState, SchoolTime};
use serde::Serialize;

/// The single value the driver publishes. Each tick replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub time: SchoolTime,
    pub state: ResolvedState,
    pub message: DisplayMessage,
    /// 0 for the evaluation made at start, then one per timer firing.
    pub tick: u64,
    pub evaluated_at: DateTime<Utc>,
}
