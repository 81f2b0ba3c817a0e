//! Fixed-step replay of recorded events.
//!
//! Loads `time,label` rows from CSV into a [`Timeline`] and drives a [`Feed`]
//! across it in equal steps, the way a playback clock would. Used by the
//! `timeline-scan` binary.
//!
//! # Input format
//!
//! ```text
//! time,label
//! 0,spawn
//! 1500,rotate
//! 2250,drop
//! ```
//!
//! Rows may appear in any order; times must be unique.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;

use crate::{Feed, Timeline};

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub time: i64,
    pub label: String,
}

/// Replay window and step size.
///
/// `start` and `until` default to the first and last event time. Both bounds
/// are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub start: Option<i64>,
    pub until: Option<i64>,
    pub step: i64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: None,
            until: None,
            step: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub steps: u64,
    pub events: u64,
    /// Feed position after the last step.
    pub position: i64,
}

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_events(file).with_context(|| format!("read {}", path.display()))
}

pub fn read_events<R: Read>(reader: R) -> Result<Vec<Event>> {
    let mut csv = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut events = Vec::new();
    for (row, record) in csv.deserialize().enumerate() {
        let event: Event = record.with_context(|| format!("csv row {}", row + 1))?;
        events.push(event);
    }
    debug!("loaded {} events", events.len());
    Ok(events)
}

pub fn build_timeline(events: Vec<Event>) -> Result<Timeline<Event>> {
    Timeline::new(events, |event| event.time).context("build timeline")
}

/// Play forward from `start` through `until`, calling `emit` with the step
/// target and each event passed during that step.
pub fn replay<'a, F>(
    timeline: &'a Timeline<Event>,
    config: &ScanConfig,
    mut emit: F,
) -> Result<ScanStats>
where
    F: FnMut(i64, &'a Event),
{
    ensure!(config.step > 0, "step must be positive, got {}", config.step);
    let start = config.start.unwrap_or(timeline.begin());
    // Exclusive cursor: the feed must move one past `until` to pass it.
    let stop = config.until.unwrap_or(timeline.end()).saturating_add(1);

    let mut feed = timeline.feed_from(start);
    let mut stats = ScanStats::default();
    while feed.now() < stop {
        let delta = config.step.min(stop.saturating_sub(feed.now()));
        let target = feed.now() + delta;
        feed.play_each(delta, |event| {
            stats.events += 1;
            emit(target, event);
        })?;
        stats.steps += 1;
    }
    stats.position = feed.now();
    debug!("replay {start}..{stop}: {stats:?}");
    Ok(stats)
}

/// Play backward from `until` down to `start`, calling `emit` with the step
/// target and each event un-passed during that step, latest first.
pub fn rewind<'a, F>(
    timeline: &'a Timeline<Event>,
    config: &ScanConfig,
    mut emit: F,
) -> Result<ScanStats>
where
    F: FnMut(i64, &'a Event),
{
    ensure!(config.step > 0, "step must be positive, got {}", config.step);
    let start = config.start.unwrap_or(timeline.begin());
    let from = config.until.unwrap_or(timeline.end()).saturating_add(1);

    let mut feed: Feed<'a, Event> = timeline.feed_from(from);
    let mut stats = ScanStats::default();
    while feed.now() > start {
        let delta = config.step.min(feed.now().saturating_sub(start));
        let target = feed.now() - delta;
        feed.back_each(delta, |event| {
            stats.events += 1;
            emit(target, event);
        })?;
        stats.steps += 1;
    }
    stats.position = feed.now();
    debug!("rewind {from}..{start}: {stats:?}");
    Ok(stats)
}
