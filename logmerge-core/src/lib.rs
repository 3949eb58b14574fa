// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod has_timestamp;
pub mod record;
pub mod sink;
pub mod source;

pub use self::error::{MergeError, Result};
pub use self::has_timestamp::HasTimestamp;
pub use self::record::Record;
pub use self::sink::Sink;
pub use self::source::{AsyncSource, Source};
