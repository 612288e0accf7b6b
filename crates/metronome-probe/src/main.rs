use std::sync::Arc;

use anyhow::Context;
use serde_json::json;
use tracing::info;

use metronome_core::{exporter::NoOpExporter, reader::PeriodicReader};
use metronome_model::{ProcessEnv, ReaderOptions};
use metronome_observe::{LoggerConfig, init_logger};

/// Prints the periodic-export plan this environment would produce.
///
/// Usage: `metronome-probe [current-thread|multi-thread]` (default: multi-thread).
fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig::from_source(&ProcessEnv)?;
    init_logger(&cfg)?;

    // 2) runtime; its flavor feeds the capacity probe
    let flavor = std::env::args().nth(1).unwrap_or_else(|| "multi-thread".into());
    let runtime = match flavor.as_str() {
        "current-thread" => tokio::runtime::Builder::new_current_thread().build(),
        "multi-thread" => tokio::runtime::Builder::new_multi_thread().build(),
        other => {
            anyhow::bail!("unknown runtime flavor: {other} (expected: current-thread|multi-thread)")
        }
    }
    .context("failed to build tokio runtime")?;
    info!(flavor = %flavor, "runtime started");

    // 3) plan
    let reader = runtime.block_on(async {
        PeriodicReader::new(Arc::new(NoOpExporter), &ReaderOptions::default())
    })?;

    let plan = json!({
        "runtime": flavor,
        "mode": reader.mode(),
        "config": reader.config(),
    });
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
