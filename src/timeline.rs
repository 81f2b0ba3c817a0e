//! Immutable, time-ordered element sequences.
//!
//! A [`Timeline`] is built once from a collection of elements and a function
//! that derives an `i64` time from each of them. Afterwards it answers "which
//! element was current at time `t`" in logarithmic time and hands out
//! [`Feed`] cursors that replay the elements in chronological order.
//!
//! # Design
//!
//! - **Index**: `times` is the sorted projection of every element time
//! - **Storage**: `by_time` maps each time to its element, giving O(1) exact hits
//! - **Search**: anything that is not an exact hit is a binary search over `times`
//!
//! Times are opaque. Units (ns, ms, game ticks, ...) are up to the caller.
//!
//! # Example
//!
//! ```
//! use chronicle_timeline::Timeline;
//!
//! let line = Timeline::new(vec![30_i64, 10, 20], |t| *t)?;
//! assert_eq!(line.begin(), 10);
//! assert_eq!(line.find(25), Some(&20));
//! assert_eq!(line.find(5), None);
//! # Ok::<(), chronicle_timeline::Error>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::iter::FusedIterator;

use log::debug;

use crate::feed::{passed, Feed};
use crate::{Error, Result};

/// An immutable sequence of elements ordered by the time they occur.
///
/// Element times are unique and a timeline always holds at least one element,
/// so [`begin`](Timeline::begin) and [`end`](Timeline::end) are always defined.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    /// Element times, strictly increasing.
    times: Vec<i64>,
    /// Time -> element. Same key set as `times`.
    by_time: HashMap<i64, T>,
}

impl<T> Timeline<T> {
    /// Build a timeline from `elements`, timing each one with `time_of`.
    ///
    /// Input order does not matter, but already-ordered input skips the sort
    /// pass over the time index.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyTimeline`: `elements` yielded nothing
    /// - `Error::DuplicateTime`: an element shares its time with an earlier one;
    ///   reported for the first such element in input order
    pub fn new<I, F>(elements: I, mut time_of: F) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> i64,
    {
        let elements = elements.into_iter();
        let (hint, _) = elements.size_hint();
        let mut times = Vec::with_capacity(hint);
        let mut by_time = HashMap::with_capacity(hint);
        let mut ordered = true;

        for (index, element) in elements.enumerate() {
            let time = time_of(&element);
            match by_time.entry(time) {
                Entry::Occupied(_) => return Err(Error::DuplicateTime { time, index }),
                Entry::Vacant(slot) => {
                    slot.insert(element);
                }
            }
            if let Some(&last) = times.last() {
                ordered &= last < time;
            }
            times.push(time);
        }

        if times.is_empty() {
            return Err(Error::EmptyTimeline);
        }
        if !ordered {
            debug!("timeline input out of order, sorting {} times", times.len());
            times.sort_unstable();
        }
        debug_assert_eq!(by_time.len(), times.len(), "index/map size mismatch");

        Ok(Self { times, by_time })
    }

    /// Number of elements on the timeline.
    pub fn count(&self) -> usize {
        self.times.len()
    }

    /// Time of the first element.
    pub fn begin(&self) -> i64 {
        self.times[0]
    }

    /// Time of the last element.
    pub fn end(&self) -> i64 {
        self.times[self.times.len() - 1]
    }

    /// Time spanned from the first to the last element, saturating at `i64::MAX`.
    pub fn duration(&self) -> i64 {
        self.end().saturating_sub(self.begin())
    }

    /// The sorted element times.
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// The element occurring exactly at `time`, if any.
    pub fn get(&self, time: i64) -> Option<&T> {
        self.by_time.get(&time)
    }

    /// Find the last element whose time is less than or equal to `time`.
    ///
    /// Returns `None` when `time` precedes every element.
    pub fn find(&self, time: i64) -> Option<&T> {
        if let Some(element) = self.by_time.get(&time) {
            return Some(element);
        }
        self.index_at_or_before(time).map(|index| self.element_at(index))
    }

    /// Create a [`Feed`] positioned at `start`.
    ///
    /// An element occurring exactly at `start` has not been passed yet.
    pub fn feed_from(&self, start: i64) -> Feed<'_, T> {
        Feed::new(self, start)
    }

    /// Iterate `(time, element)` pairs in chronological order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            times: self.times.iter(),
            by_time: &self.by_time,
        }
    }

    /// Index of the last time at or before `time`.
    fn index_at_or_before(&self, time: i64) -> Option<usize> {
        match self.times.binary_search(&time) {
            Ok(index) => Some(index),
            Err(0) => None,
            Err(insert) => Some(insert - 1),
        }
    }

    /// Number of elements passed by a feed positioned at `position`.
    pub(crate) fn passed_before(&self, position: i64) -> usize {
        let count = match self.index_at_or_before(position) {
            // Exclusive: the element sitting on `position` is still ahead.
            Some(index) if self.times[index] == position => index,
            Some(index) => index + 1,
            None => 0,
        };
        debug_assert!(count == 0 || passed(self.times[count - 1], position));
        debug_assert!(count == self.count() || !passed(self.times[count], position));
        count
    }

    pub(crate) fn element_at(&self, index: usize) -> &T {
        &self.by_time[&self.times[index]]
    }
}

impl<'a, T> IntoIterator for &'a Timeline<T> {
    type Item = (i64, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Chronological iterator over a [`Timeline`], see [`Timeline::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    times: std::slice::Iter<'a, i64>,
    by_time: &'a HashMap<i64, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i64, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let time = *self.times.next()?;
        Some((time, &self.by_time[&time]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.times.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let time = *self.times.next_back()?;
        Some((time, &self.by_time[&time]))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
