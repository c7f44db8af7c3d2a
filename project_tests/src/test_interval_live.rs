//! # Interval Live Test
//!
//! Runs a real interval pipeline for a few seconds, prints every
//! notification, then cancels and checks that the stream went quiet.

use std::time::Duration;

use lib_rx::loggers;
use lib_rx::prelude::*;

/// Executes the live interval run.
///
/// // Statement: Exits non-zero if a value arrives after cancellation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    loggers::setup_logging("interval_live", None, "debug")?;

    let collector = Collector::new();
    let printer = PrintObserver::new("live");

    println!("[*] Subscribing to interval(200ms) -> skip(2) -> abs ...");
    let source = interval(Duration::from_millis(200)).map(|tick: u64| -(tick as i64)).skip(2).abs();

    let printed = source.subscribe(printer);
    let recorded = source.subscribe(collector.clone());

    tokio::time::sleep(Duration::from_millis(1500)).await;

    // // Statement: Cancel both subscriptions and snapshot what was recorded
    printed.unsubscribe();
    recorded.unsubscribe();
    let seen = collector.len();
    println!("[INFO] {} value(s) recorded before cancellation: {:?}", seen, collector.values());

    tokio::time::sleep(Duration::from_millis(600)).await;

    if collector.len() != seen {
        eprintln!("\n[ERROR] Values were delivered after cancellation:");
        eprintln!(">>> {:?}", collector.values());
        std::process::exit(1);
    }

    println!("[SUCCESS] Stream stayed quiet after cancellation.");
    Ok(())
}
