// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod console;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use parking_sim::Facility;
use parking_sim_domain::{format_timestamp, parse_timestamp};
use std::io;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

use crate::clock::SimulationClock;
use crate::console::Console;

/// Parking Simulator - interactive single-facility parking simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of parking spots in the facility
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    capacity: u32,

    /// Simulation start time as `YYYY-MM-DD HH:MM:SS`. Defaults to the current UTC time.
    #[arg(short, long, value_parser = parse_timestamp)]
    start: Option<PrimitiveDateTime>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn start_time(&self) -> Result<PrimitiveDateTime> {
        if let Some(start) = self.start {
            return Ok(start);
        }
        let now: OffsetDateTime = OffsetDateTime::now_utc()
            .replace_nanosecond(0)
            .wrap_err("Failed to read the system clock")?;
        Ok(PrimitiveDateTime::new(now.date(), now.time()))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over the verbosity flags when set
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    let start: PrimitiveDateTime = args.start_time()?;
    let facility: Facility = Facility::new(args.capacity)?;
    info!(
        capacity = args.capacity,
        start = %format_timestamp(start),
        "Initializing parking simulator"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        facility,
        SimulationClock::new(start),
        stdin.lock(),
        stdout.lock(),
    );
    console.run().wrap_err("Console I/O failed")?;

    info!(
        parked = console.facility().occupied_count(),
        departures_today = console.facility().ledger().len(),
        end = %format_timestamp(console.clock().now()),
        "Simulation ended"
    );

    Ok(())
}
