//! Transaction deadlines, measured from the nemesis block.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{DEFAULT_DEADLINE, NEMESIS_EPOCH_SECS};

const NEMESIS_EPOCH_MILLIS: i64 = NEMESIS_EPOCH_SECS * 1000;

/// Instant after which the network drops an unconfirmed transaction.
///
/// Stored as milliseconds elapsed since 2016-04-01T00:00:00Z, which is also
/// the value serialized into the signing envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Deadline {
    timestamp: u64,
}

impl Deadline {
    /// `duration` from the current wall-clock time.
    pub fn from_now(duration: Duration) -> Self {
        let now = Utc::now().timestamp_millis() - NEMESIS_EPOCH_MILLIS;
        let millis = u64::try_from(now).unwrap_or(0);
        Self {
            timestamp: millis.saturating_add(duration_millis(duration)),
        }
    }

    /// `duration` after the nemesis block.
    pub fn from_nemesis(duration: Duration) -> Self {
        Self {
            timestamp: duration_millis(duration),
        }
    }

    /// A deadline carrying a raw timestamp, as decoded from the network.
    pub fn from_timestamp(timestamp: u64) -> Self {
        Self { timestamp }
    }

    /// Milliseconds since the nemesis block.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Wall-clock instant of the deadline.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.timestamp).ok()?.checked_add(NEMESIS_EPOCH_MILLIS)?;
        Utc.timestamp_millis_opt(millis).single()
    }

    /// True once the current time is past the deadline.
    pub fn is_expired(&self) -> bool {
        self.date().map_or(false, |date| date < Utc::now())
    }
}

impl Default for Deadline {
    /// One hour from now.
    fn default() -> Self {
        Self::from_now(DEFAULT_DEADLINE)
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
