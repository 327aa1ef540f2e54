// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod minimal_tracer;

use std::{
    env,
    error::Error,
    io::{self, Write},
    process::exit,
    sync::Arc,
    time::Instant,
};

use chrono::{DateTime, Utc};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use minimal_tracer::MinimalTracer;
use terminal_size::{terminal_size, Width};
use tokio::select;
use tracing::trace;
use tzline_core::{render::render, Dashboard, DashboardConfig, DashboardState, VERSION};
use tzline_timezone::{grouped, search};
use tzline_utils::{Clock, SystemClock};

#[derive(Debug, Default)]
struct ViewOptions {
    at: Option<DateTime<Utc>>,
    shift: i64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let now = Instant::now();

    MinimalTracer::register()?;
    trace!("Started tzline");

    let config = DashboardConfig::from_env();
    trace!(
        "Loaded configuration in {}ms, host zone {}",
        now.elapsed().as_millis(),
        config.host.name()
    );

    start_cli(config).await
}

fn print_version() {
    println!("tzline {}", VERSION);
}

fn usage() {
    print_version();
    println!(
        r#"

Usage:
  tzline [--at <time>] [--shift <hours>]
  tzline --watch [--at <time>] [--shift <hours>]
  tzline --zones [search]
  tzline -v | --version
  tzline -h | --help

Options:
  -v, --version     Print version information
  -h, --help        Print this help message
  -w, --watch       Keep the timeline on screen, refreshed every tick
      --zones       List the common time zones, optionally filtered
      --at          Base time as RFC 3339, e.g. 2024-01-15T12:00:00Z
      --shift       Move the base time by whole hours, e.g. -24 or 6

Environment:
  TZLINE_ZONES          Zones to show: Zone/Id or Label=Zone/Id, comma separated
  TZLINE_WINDOW_HOURS   Hours in the timeline (default 48)
  TZLINE_START_OFFSET   First hour relative to the base time (default -24)
  TZLINE_TICK_SECS      Refresh period in watch mode (default 60)
  TZLINE_HOST_TZ        Zone used for the shared header (default: system)
  RUST_LOG              Log filter, e.g. warn or tzline_timezone=debug
"#
    );
}

async fn start_cli(config: DashboardConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = ViewOptions::default();
    let mut watch = false;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-v" | "--version" => {
                print_version();
                return Ok(());
            },
            "-h" | "--help" => {
                usage();
                return Ok(());
            },
            "--zones" => {
                print_catalog(args.get(index + 1).map(String::as_str).unwrap_or(""));
                return Ok(());
            },
            "-w" | "--watch" => watch = true,
            "--at" => {
                index += 1;
                let Some(value) = args.get(index) else {
                    eprintln!("--at: a time is required.");
                    exit(1);
                };
                match DateTime::parse_from_rfc3339(value) {
                    Ok(at) => options.at = Some(at.with_timezone(&Utc)),
                    Err(err) => {
                        eprintln!("--at: invalid time \"{}\": {}", value, err);
                        exit(1);
                    },
                }
            },
            "--shift" => {
                index += 1;
                match args.get(index).map(|value| value.parse::<i64>()) {
                    Some(Ok(hours)) => options.shift = hours,
                    _ => {
                        eprintln!("--shift: a whole number of hours is required.");
                        exit(1);
                    },
                }
            },
            arg => {
                eprintln!("Unknown option: {}", arg);
                usage();
                exit(1);
            },
        }
        index += 1;
    }

    if watch {
        run_watch(&config, &options).await?;
    } else {
        let clock = SystemClock;
        let state = apply_options(DashboardState::mount(&config, clock.now()), &options, clock.now());
        print!("{}", render(&state, terminal_width()));
    }

    Ok(())
}

fn apply_options(state: DashboardState, options: &ViewOptions, now: DateTime<Utc>) -> DashboardState {
    let state = match options.at {
        Some(at) => state.set_base_time(at, now),
        None => state,
    };
    if options.shift != 0 {
        state.shift_base(options.shift, now)
    } else {
        state
    }
}

async fn run_watch(config: &DashboardConfig, options: &ViewOptions) -> io::Result<()> {
    let dashboard = Dashboard::start(config, Arc::new(SystemClock));
    if let Some(at) = options.at {
        dashboard.set_base_time(at);
    }
    if options.shift != 0 {
        dashboard.shift_base(options.shift);
    }

    let mut changes = dashboard.subscribe();
    let state = changes.borrow_and_update().clone();
    draw(&state)?;

    loop {
        select! {
            _ = tokio::signal::ctrl_c() => {
                trace!("Interrupted, leaving watch mode");
                break;
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = changes.borrow_and_update().clone();
                draw(&state)?;
            }
        }
    }

    Ok(())
}

fn draw(state: &DashboardState) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    write!(stdout, "{}", render(state, terminal_width()))?;
    stdout.flush()
}

fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(width), _)| width as usize)
}

fn print_catalog(term: &str) {
    let matches = search(term);
    if matches.is_empty() {
        println!("No time zones match \"{}\"", term);
        return;
    }
    for (group, entries) in grouped(matches) {
        println!("{}", group);
        for entry in entries {
            println!("  {:<32} {}", entry.zone_id, entry.label);
        }
    }
}
