use chrono::{FixedOffset, Local, Utc};
use classbell_core::ClassbellConfig;
use classbell_schedule::SchoolTime;
use parking_lot::RwLock;

/// Where the driver reads "now" from.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> SchoolTime;
}

/// Host wall clock, read in the local zone or at a fixed UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn local() -> Self {
        Self { offset: None }
    }

    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }

    pub fn from_config(config: &ClassbellConfig) -> Self {
        Self {
            offset: config.utc_offset,
        }
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> SchoolTime {
        match self.offset {
            Some(offset) => SchoolTime::from_datetime(&Utc::now().with_timezone(&offset)),
            None => SchoolTime::from_datetime(&Local::now()),
        }
    }
}

/// Manually driven clock for previews and tests.
#[derive(Debug)]
pub struct FixedClock {
    current: RwLock<SchoolTime>,
}

impl FixedClock {
    pub fn new(time: SchoolTime) -> Self {
        Self {
            current: RwLock::new(time),
        }
    }

    pub fn set(&self, time: SchoolTime) {
        *self.current.write() = time;
    }

    pub fn advance(&self, minutes: u32) {
        let mut current = self.current.write();
        *current = current.plus_minutes(minutes);
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> SchoolTime {
        *self.current.read()
    }
}
