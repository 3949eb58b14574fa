// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Append-only consumer of the merged output.
///
/// A sink receives records in non-decreasing timestamp order, followed by
/// exactly one call to [`done`](Sink::done). When a merge aborts with an
/// error, `done` is never called.
pub trait Sink<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Accepts the next record of the merged output.
    ///
    /// # Errors
    /// A failing emit aborts the merge.
    fn emit(&mut self, record: T) -> Result<(), Self::Error>;

    /// Signals that the last record has been emitted.
    ///
    /// # Errors
    /// A failure here is reported to the caller of the merge.
    fn done(&mut self) -> Result<(), Self::Error>;
}

impl<T, K: Sink<T> + ?Sized> Sink<T> for &mut K {
    type Error = K::Error;

    fn emit(&mut self, record: T) -> Result<(), Self::Error> {
        (**self).emit(record)
    }

    fn done(&mut self) -> Result<(), Self::Error> {
        (**self).done()
    }
}
