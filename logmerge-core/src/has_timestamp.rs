// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A trait for records that carry the instant used to order them.
///
/// This is the only thing the merge drivers know about a record: the payload
/// stays opaque, and two records are compared exclusively through their
/// timestamps.
///
/// # Type Parameters
/// * `Timestamp` - The type representing the instant (must be `Ord + Copy`)
///
/// # Examples
///
/// ```
/// use logmerge_core::HasTimestamp;
///
/// #[derive(Clone, Debug)]
/// struct AccessLog {
///     line: String,
///     epoch_ms: u64,
/// }
///
/// impl HasTimestamp for AccessLog {
///     type Timestamp = u64;
///
///     fn timestamp(&self) -> u64 {
///         self.epoch_ms
///     }
/// }
/// ```
///
/// Wall-clock values work just as well as counters:
///
/// ```rust
/// use logmerge_core::HasTimestamp;
/// use std::time::SystemTime;
///
/// struct Event {
///     at: SystemTime,
/// }
///
/// impl HasTimestamp for Event {
///     type Timestamp = SystemTime;
///     fn timestamp(&self) -> SystemTime { self.at }
/// }
/// ```
pub trait HasTimestamp {
    /// The type representing the timestamp
    type Timestamp: Ord + Copy + Send + Sync + std::fmt::Debug;

    /// Returns the timestamp value for this record.
    fn timestamp(&self) -> Self::Timestamp;
}

impl<R: HasTimestamp + ?Sized> HasTimestamp for Box<R> {
    type Timestamp = R::Timestamp;

    fn timestamp(&self) -> Self::Timestamp {
        (**self).timestamp()
    }
}
