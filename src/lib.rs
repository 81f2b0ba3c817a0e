//! Immutable time-ordered timelines with bidirectional replay feeds.
//!
//! Build a [`Timeline`] once from recorded elements, then scroll through it
//! with any number of independent [`Feed`] cursors, e.g. to replay events
//! against a playback clock.

pub mod error;
pub mod feed;
#[cfg(feature = "cli")]
pub mod scan;
pub mod timeline;

pub use error::{Error, ErrorKind, Result};
pub use feed::Feed;
pub use timeline::{Iter, Timeline};
