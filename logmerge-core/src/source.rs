// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::HasTimestamp;
use async_trait::async_trait;

/// A stream of records yielded oldest-first, one pop at a time.
///
/// `Ok(None)` marks exhaustion. Exhaustion is permanent: once a source has
/// returned `Ok(None)` every later pop must return `Ok(None)` as well.
///
/// Sources stay owned by the caller. The drivers borrow them for the length
/// of one merge and never close or reset them.
///
/// # Examples
///
/// ```
/// use logmerge_core::{Record, Source};
/// use std::collections::VecDeque;
/// use std::convert::Infallible;
///
/// struct Lines(VecDeque<Record<u64, &'static str>>);
///
/// impl Source for Lines {
///     type Item = Record<u64, &'static str>;
///     type Error = Infallible;
///
///     fn pop(&mut self) -> Result<Option<Self::Item>, Infallible> {
///         Ok(self.0.pop_front())
///     }
/// }
/// ```
pub trait Source {
    type Item: HasTimestamp;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Removes and returns the next record, or `Ok(None)` once exhausted.
    ///
    /// # Errors
    /// Returns the source's own error when the record cannot be fetched.
    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pop()
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;
    type Error = S::Error;

    fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pop()
    }
}

/// The latent counterpart of [`Source`]: each pop may take a while to resolve
/// (a disk read, a network round trip).
///
/// The same exhaustion rules apply.
#[async_trait]
pub trait AsyncSource: Send {
    type Item: HasTimestamp + Send;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolves to the next record, or `Ok(None)` once exhausted.
    ///
    /// # Errors
    /// Returns the source's own error when the record cannot be fetched.
    async fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error>;
}

#[async_trait]
impl<S: AsyncSource + ?Sized> AsyncSource for Box<S> {
    type Item = S::Item;
    type Error = S::Error;

    async fn pop(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        (**self).pop().await
    }
}
