// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::HasTimestamp;
use std::fmt;

/// A payload paired with the instant it was produced at.
///
/// Sources are free to yield any [`HasTimestamp`] type; `Record` is the
/// ready-made one for callers that don't have a domain type of their own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record<Ts, P> {
    pub timestamp: Ts,
    pub payload: P,
}

impl<Ts, P> Record<Ts, P> {
    pub const fn new(timestamp: Ts, payload: P) -> Self {
        Self { timestamp, payload }
    }

    /// Consumes the record, keeping only the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<Ts, P> HasTimestamp for Record<Ts, P>
where
    Ts: Ord + Copy + Send + Sync + fmt::Debug,
{
    type Timestamp = Ts;

    fn timestamp(&self) -> Ts {
        self.timestamp
    }
}

impl<Ts: fmt::Debug, P: fmt::Display> fmt::Display for Record<Ts, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.timestamp, self.payload)
    }
}
