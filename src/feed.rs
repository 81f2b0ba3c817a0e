//! Chronological cursor over a [`Timeline`].
//!
//! A [`Feed`] is a moving point on the time axis. Moving it forward or back by
//! some delta reports every element crossed on the way.
//!
//! # Design
//!
//! - `position` is any `i64`, not necessarily an element time
//! - `cursor` counts the elements already passed, i.e. those with a time
//!   strictly less than `position`
//! - An element sitting exactly on `position` is still upcoming; the next unit
//!   of forward motion passes it
//!
//! Feeds borrow their timeline and never mutate it, so any number of them can
//! replay the same timeline independently.
//!
//! # Example
//!
//! ```
//! use chronicle_timeline::Timeline;
//!
//! let line = Timeline::new(0..=10_i64, |v| v * 1000)?;
//! let mut feed = line.feed_from(0);
//!
//! let mut seen = Vec::new();
//! feed.play_each(5000, |v| seen.push(*v))?;
//! assert_eq!(seen, vec![0, 1, 2, 3, 4]);
//! assert_eq!(feed.now(), 5000);
//! assert_eq!(feed.back(1500)?, Some(&3));
//! # Ok::<(), chronicle_timeline::Error>(())
//! ```

use std::fmt;

use log::trace;

use crate::timeline::Timeline;
use crate::{Error, Result};

/// Whether an element at `element_time` has been passed by a feed at `position`.
#[inline]
pub(crate) fn passed(element_time: i64, position: i64) -> bool {
    element_time < position
}

/// A cursor for navigating a [`Timeline`] in chronological order.
///
/// Created with [`Timeline::feed_from`].
pub struct Feed<'a, T> {
    timeline: &'a Timeline<T>,
    /// Current time coordinate.
    position: i64,
    /// Index in `timeline.times()` of the next element yet to occur.
    cursor: usize,
}

impl<'a, T> Feed<'a, T> {
    pub(crate) fn new(timeline: &'a Timeline<T>, position: i64) -> Self {
        Self {
            timeline,
            position,
            cursor: timeline.passed_before(position),
        }
    }

    /// The timeline this feed replays.
    pub fn timeline(&self) -> &'a Timeline<T> {
        self.timeline
    }

    /// Current position on the time axis.
    pub fn now(&self) -> i64 {
        self.position
    }

    /// `true` when no element has been passed yet.
    pub fn at_start(&self) -> bool {
        self.cursor == 0
    }

    /// `true` when every element has been passed.
    pub fn at_end(&self) -> bool {
        self.cursor >= self.timeline.count()
    }

    /// Number of elements passed so far.
    pub fn passed_count(&self) -> usize {
        self.cursor
    }

    /// Number of elements yet to occur.
    pub fn remaining(&self) -> usize {
        self.timeline.count() - self.cursor
    }

    /// The most recently passed element.
    pub fn last(&self) -> Option<&'a T> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.timeline.element_at(index))
    }

    /// The next element to occur.
    pub fn upcoming(&self) -> Option<&'a T> {
        (!self.at_end()).then(|| self.timeline.element_at(self.cursor))
    }

    /// Time since the last passed element, or `None` if nothing has passed.
    ///
    /// Saturates at `i64::MAX`.
    pub fn last_delta(&self) -> Option<i64> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.position.saturating_sub(self.timeline.times()[index]))
    }

    /// Time until the next element, or `None` if no elements remain.
    ///
    /// Zero when an element sits exactly on the current position. Saturates at
    /// `i64::MAX`.
    pub fn next_delta(&self) -> Option<i64> {
        self.timeline
            .times()
            .get(self.cursor)
            .map(|&time| time.saturating_sub(self.position))
    }

    /// Move forward by `delta`, handing each passed element to `on_passed` in
    /// chronological order.
    ///
    /// # Errors
    ///
    /// - `Error::NegativeDelta`: `delta < 0`
    /// - `Error::PositionOverflow`: the new position does not fit in `i64`
    ///
    /// The feed is left untouched on error.
    pub fn play_each<F>(&mut self, delta: i64, mut on_passed: F) -> Result<()>
    where
        F: FnMut(&'a T),
    {
        let target = self.target(delta, i64::checked_add)?;
        let timeline = self.timeline;
        let times = timeline.times();
        let from = self.cursor;

        while self.cursor < times.len() && passed(times[self.cursor], target) {
            on_passed(timeline.element_at(self.cursor));
            self.cursor += 1;
        }

        trace!(
            "play {delta}: {} -> {target}, passed {}",
            self.position,
            self.cursor - from
        );
        self.position = target;
        Ok(())
    }

    /// Move forward by `delta` and return the last element passed.
    ///
    /// Even if nothing is passed during this call, the last element passed
    /// earlier is returned. `None` means the feed is still before every element.
    ///
    /// # Errors
    ///
    /// See [`play_each`](Feed::play_each).
    pub fn play(&mut self, delta: i64) -> Result<Option<&'a T>> {
        self.play_each(delta, |_| {})?;
        Ok(self.last())
    }

    /// Move backward by `delta`, handing each element that becomes upcoming
    /// again to `on_unpassed` in reverse chronological order.
    ///
    /// An element is only un-passed once the position reaches its time, so
    /// `back_each(0, ..)` never reports anything.
    ///
    /// # Errors
    ///
    /// - `Error::NegativeDelta`: `delta < 0`
    /// - `Error::PositionOverflow`: the new position does not fit in `i64`
    ///
    /// The feed is left untouched on error.
    pub fn back_each<F>(&mut self, delta: i64, mut on_unpassed: F) -> Result<()>
    where
        F: FnMut(&'a T),
    {
        let target = self.target(delta, i64::checked_sub)?;
        let timeline = self.timeline;
        let times = timeline.times();
        let from = self.cursor;

        while self.cursor > 0 && !passed(times[self.cursor - 1], target) {
            on_unpassed(timeline.element_at(self.cursor - 1));
            self.cursor -= 1;
        }

        trace!(
            "back {delta}: {} -> {target}, unpassed {}",
            self.position,
            from - self.cursor
        );
        self.position = target;
        Ok(())
    }

    /// Move backward by `delta` and return the last element still passed.
    ///
    /// # Errors
    ///
    /// See [`back_each`](Feed::back_each).
    pub fn back(&mut self, delta: i64) -> Result<Option<&'a T>> {
        self.back_each(delta, |_| {})?;
        Ok(self.last())
    }

    /// Jump to `time` without reporting crossed elements.
    ///
    /// Equivalent to a fresh [`Timeline::feed_from`] at `time`.
    pub fn seek(&mut self, time: i64) {
        self.cursor = self.timeline.passed_before(time);
        trace!("seek {} -> {time}, passed {}", self.position, self.cursor);
        self.position = time;
    }

    fn target(&self, delta: i64, step: fn(i64, i64) -> Option<i64>) -> Result<i64> {
        if delta < 0 {
            return Err(Error::NegativeDelta(delta));
        }
        step(self.position, delta).ok_or(Error::PositionOverflow {
            position: self.position,
            delta,
        })
    }
}

impl<T> Clone for Feed<'_, T> {
    fn clone(&self) -> Self {
        Self {
            timeline: self.timeline,
            position: self.position,
            cursor: self.cursor,
        }
    }
}

impl<T> fmt::Debug for Feed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feed")
            .field("position", &self.position)
            .field("cursor", &self.cursor)
            .field("count", &self.timeline.count())
            .finish()
    }
}
