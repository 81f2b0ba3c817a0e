use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use chronicle_timeline::scan::{build_timeline, load_events, replay, rewind, Event, ScanConfig};

#[derive(Parser, Debug)]
#[command(name = "timeline-scan")]
#[command(about = "Replay a CSV of time,label events in fixed steps")]
struct Cli {
    /// Input CSV with `time,label` columns
    #[arg(long)]
    input: PathBuf,

    /// Time advanced per step
    #[arg(long, default_value_t = 1)]
    step: i64,

    /// First time to replay (default: first event)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<i64>,

    /// Last time to replay (default: last event)
    #[arg(long, allow_negative_numbers = true)]
    until: Option<i64>,

    /// Replay from `until` back to `start`
    #[arg(long)]
    reverse: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let events = load_events(&cli.input)?;
    let timeline = build_timeline(events)?;
    info!(
        "Loaded {} events spanning {}..={} ({})",
        timeline.count(),
        timeline.begin(),
        timeline.end(),
        timeline.duration()
    );

    let config = ScanConfig {
        start: cli.start,
        until: cli.until,
        step: cli.step,
    };
    let print = |at: i64, event: &Event| {
        println!("{at}\t{}\t{}", event.time, event.label);
    };
    let stats = if cli.reverse {
        rewind(&timeline, &config, print)?
    } else {
        replay(&timeline, &config, print)?
    };

    info!(
        "{} events over {} steps, stopped at {}",
        stats.events, stats.steps, stats.position
    );
    Ok(())
}
