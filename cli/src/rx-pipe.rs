use anyhow::{Context, Result, bail};
use lib_rx::loggers;
use lib_rx::prelude::*;
use tokio::signal;
use tokio::sync::oneshot;

mod pipe_config;
mod pipeline;

/// How the stream ended.
enum Outcome {
    Completed,
    Failed(RxError),
}

/// Prints every notification and reports the terminal one back to `main`.
struct ReportingObserver {
    printer: PrintObserver<f64>,
    done: Option<oneshot::Sender<Outcome>>,
}

impl ReportingObserver {
    fn report(&mut self, outcome: Outcome) {
        if let Some(tx) = self.done.take() {
            let _ = tx.send(outcome);
        }
    }
}

impl Observer<f64> for ReportingObserver {
    fn on_next(&mut self, value: f64) {
        self.printer.on_next(value);
    }

    fn on_error(&mut self, err: RxError) {
        self.printer.on_error(err.clone());
        self.report(Outcome::Failed(err));
    }

    fn on_complete(&mut self) {
        self.printer.on_complete();
        self.report(Outcome::Completed);
    }
}

async fn terminate_signal() {
    #[cfg(unix)]
    {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term_signal) => {
                term_signal.recv().await;
            }
            Err(e) => {
                log::warn!("Unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = pipe_config::load_config(std::env::args_os())?.resolve();
    let log_path = loggers::setup_logging("rx_pipe", settings.log_dir.as_deref(), &settings.log_level)
        .context("Failed to initialize logging")?;
    if let Some(path) = log_path {
        log::info!("Logging to {}", path.display());
    }

    log::info!("Pipeline: {}", pipeline::describe(&settings));

    let (done_tx, done_rx) = oneshot::channel();
    let observer = ReportingObserver {
        printer: PrintObserver::new(settings.label.clone()),
        done: Some(done_tx),
    };
    let subscription = pipeline::build_pipeline(&settings).subscribe(observer);

    let outcome = tokio::select! {
        outcome = done_rx => outcome.ok(),
        _ = signal::ctrl_c() => {
            log::info!("Ctrl-C received, cancelling subscription.");
            None
        }
        _ = terminate_signal() => {
            log::info!("SIGTERM received, cancelling subscription.");
            None
        }
    };

    subscription.unsubscribe();

    match outcome {
        Some(Outcome::Failed(err)) => bail!("pipeline failed: {}", err),
        Some(Outcome::Completed) => log::info!("Pipeline completed."),
        None => log::info!("Pipeline cancelled."),
    }
    Ok(())
}
