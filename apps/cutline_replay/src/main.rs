//! cutline-replay: run a recorded editing session through the placement
//! engine and print the resulting timeline.

mod scenario;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use cutline_core::ids::SequentialIds;
use cutline_core::preview::{Preview, PreviewSink};
use cutline_core::TimelineEditor;
use scenario::{GestureReport, Scenario};

// Ids handed out during replay start here so they never collide with seeds.
const FIRST_REPLAY_ID: u128 = 1 << 64;

const USAGE: &str = "Usage: cutline-replay <scenario.json> [--frames]";

#[derive(Debug, PartialEq)]
struct Args {
    scenario: PathBuf,
    frames: bool,
}

/// Logs each preview at debug, or at info with `--frames`.
struct TracingSink {
    verbose: bool,
    shown: usize,
}

impl PreviewSink for TracingSink {
    fn show(&mut self, preview: &Preview) {
        self.shown += 1;
        if self.verbose {
            tracing::info!(frame = self.shown, ?preview, "preview");
        } else {
            tracing::debug!(frame = self.shown, ?preview, "preview");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = user_args(std::env::args());
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    let args = match parse_args(&arg_refs) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("cutline-replay: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("cutline-replay: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let scenario = Scenario::load(&args.scenario)?;
    let timeline = scenario.seed_timeline()?;
    let ids = SequentialIds::starting_at(FIRST_REPLAY_ID);
    let mut editor = TimelineEditor::with_ids(timeline, scenario.config, ids)
        .context("seed timeline is invalid")?;

    let mut sink = TracingSink {
        verbose: args.frames,
        shown: 0,
    };
    let reports = scenario.replay(&mut editor, &mut sink)?;

    let applied = reports
        .iter()
        .filter(|r| matches!(r, GestureReport::Committed(o) if o.is_applied()))
        .count();
    tracing::info!(
        gestures = reports.len(),
        applied,
        frames = sink.shown,
        revision = editor.store().revision(),
        "replay finished"
    );

    let json = serde_json::to_string_pretty(&*editor.tracks())?;
    println!("{}", json);
    Ok(())
}

/// Everything after the program name; empty if the OS gave no argv at all.
fn user_args(argv: impl Iterator<Item = String>) -> Vec<String> {
    argv.skip(1).collect()
}

fn parse_args(args: &[&str]) -> Result<Args, String> {
    let mut scenario = None;
    let mut frames = false;

    for arg in args {
        match *arg {
            "--frames" => frames = true,
            "-h" | "--help" => return Err(USAGE.into()),
            flag if flag.starts_with('-') => return Err(format!("Unknown flag: '{}'", flag)),
            path if scenario.is_none() => scenario = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument: '{}'", extra)),
        }
    }

    let scenario = scenario.ok_or(USAGE)?;
    Ok(Args { scenario, frames })
}
