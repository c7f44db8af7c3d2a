//! The global logger can only be installed once per process, so this file
//! holds a single test.

use std::fs;
use std::time::Duration;

use lib_rx::loggers;
use lib_rx::prelude::*;
use tempfile::tempdir;

#[tokio::test(flavor = "multi_thread")]
async fn test_pipeline_logs_reach_the_log_file() {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    let log_path = loggers::setup_logging("rx_test", Some(temp_dir.path()), "debug")
        .expect("logger setup failed")
        .expect("a log file path when log_dir is given");

    assert!(loggers::setup_logging("rx_test", None, "info").is_err());

    let collector = Collector::new();
    interval(Duration::from_millis(10)).take(2).subscribe(collector.clone());
    tokio::time::timeout(Duration::from_secs(5), collector.terminated())
        .await
        .expect("interval pipeline did not complete");
    log::logger().flush();

    let contents = fs::read_to_string(&log_path).expect("log file was not written");
    assert!(contents.contains("Interval started"));
    assert!(contents.contains("[DEBUG]"));
}
