//! livefeed-replay - Replays a recorded host trace through the live feed.
//!
//! Usage: livefeed-replay <trace.json> [--output <path>] [--config <path>] [--print]
//!
//! The snapshot is written exactly as the in-game adapter writes it, so a
//! trace can be used to check overlay layouts without running the game.

mod trace;

use std::path::PathBuf;

use clap::Parser;
use livefeed_core::storage::render_snapshot;
use livefeed_core::{JsonFileSink, LiveFeedConfig, SkillRules, SyncEngine};
use tracing_subscriber::filter::EnvFilter;

use trace::{ScriptedHost, TraceFile};

#[derive(Parser)]
#[command(version, about = "Replay a recorded host trace through the live feed")]
struct Cli {
    /// Recorded trace file (JSON)
    trace: PathBuf,

    /// Snapshot destination, overriding the configured output path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final snapshot to stdout
    #[arg(long)]
    print: bool,
}

/// Initialize logging, writing to LIVEFEED_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("LIVEFEED_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LiveFeedConfig::load_from(path),
        None => LiveFeedConfig::load(),
    }
    .map_err(|e| e.to_string())?;

    let output = cli.output.clone().unwrap_or_else(|| config.output_path());
    let rules = SkillRules::load(config.skill_rules_path.as_deref());
    let trace = TraceFile::load(&cli.trace)?;

    let mut host = ScriptedHost::new(trace.host);
    let mut engine = SyncEngine::new(JsonFileSink::new(&output), rules);
    engine.activate(&mut host).map_err(|e| e.to_string())?;

    let mut delivered = 0usize;
    let mut skipped = 0usize;

    for step in trace.events {
        if let Some(world) = step.world {
            host.set_world(world);
        }

        let kind = step.notification.kind();
        if !host.is_hooked(kind) {
            tracing::debug!(?kind, "Notification not hooked, skipping");
            skipped += 1;
            continue;
        }

        let result = engine
            .dispatch(&mut host, step.source, &step.notification)
            .map_err(|e| e.to_string())?;
        tracing::debug!(?kind, propagate = result.propagates(), "Notification delivered");
        delivered += 1;
    }

    engine.deactivate(&mut host);

    tracing::info!(
        delivered,
        skipped,
        output = %engine.sink().path().display(),
        "Replay finished"
    );

    if cli.print {
        let rendered = render_snapshot(engine.snapshot()).map_err(|e| e.to_string())?;
        println!("{}", String::from_utf8_lossy(&rendered));
    }

    Ok(())
}
