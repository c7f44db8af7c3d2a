use std::time::Duration;

use lib_rx::prelude::*;

use crate::pipe_config::{PipeSettings, SourceKind};

/// Assembles the configured chain: source, skip, take, abs, then scale.
pub fn build_pipeline(settings: &PipeSettings) -> Observable<f64> {
    let source: Observable<f64> = match settings.source {
        SourceKind::Interval => {
            interval(Duration::from_millis(settings.period_ms)).map(|tick: u64| tick as f64)
        }
        SourceKind::Of => of(settings.values.clone()),
    };

    let mut chain = source.skip(settings.skip);
    if let Some(count) = settings.take {
        chain = chain.take(count);
    }
    if settings.abs {
        chain = chain.abs();
    }
    if settings.scale != 1.0 {
        let factor = settings.scale;
        chain = chain.map(move |value: f64| value * factor);
    }
    chain
}

/// One line describing the chain, for the startup log.
pub fn describe(settings: &PipeSettings) -> String {
    let mut parts = vec![match settings.source {
        SourceKind::Interval => format!("interval({}ms)", settings.period_ms),
        SourceKind::Of => format!("of({:?})", settings.values),
    }];
    if settings.skip > 0 {
        parts.push(format!("skip({})", settings.skip));
    }
    if let Some(count) = settings.take {
        parts.push(format!("take({})", count));
    }
    if settings.abs {
        parts.push("abs()".to_string());
    }
    if settings.scale != 1.0 {
        parts.push(format!("map(x * {})", settings.scale));
    }
    parts.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(source: SourceKind) -> PipeSettings {
        PipeSettings {
            log_dir: None,
            log_level: "info".to_string(),
            source,
            period_ms: 10,
            values: vec![-1.0, 2.0, -3.0, 4.0, -5.0],
            skip: 0,
            take: None,
            abs: false,
            scale: 1.0,
            label: "test".to_string(),
        }
    }

    #[test]
    fn test_of_pipeline_applies_every_stage() {
        let mut s = settings(SourceKind::Of);
        s.skip = 1;
        s.take = Some(3);
        s.abs = true;
        s.scale = 10.0;

        let collector = Collector::new();
        build_pipeline(&s).subscribe(collector.clone());

        assert_eq!(collector.values(), vec![20.0, 30.0, 40.0]);
        assert!(collector.is_completed());
        assert_eq!(describe(&s), "of([-1.0, 2.0, -3.0, 4.0, -5.0]) -> skip(1) -> take(3) -> abs() -> map(x * 10)");
    }

    #[test]
    fn test_of_pipeline_passthrough() {
        let s = settings(SourceKind::Of);
        let collector = Collector::new();
        build_pipeline(&s).subscribe(collector.clone());

        assert_eq!(collector.values(), vec![-1.0, 2.0, -3.0, 4.0, -5.0]);
        assert!(collector.is_completed());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_interval_pipeline_completes_with_take() {
        let mut s = settings(SourceKind::Interval);
        s.skip = 2;
        s.take = Some(2);

        let collector = Collector::new();
        build_pipeline(&s).subscribe(collector.clone());
        tokio::time::timeout(Duration::from_secs(5), collector.terminated())
            .await
            .expect("pipeline did not terminate");

        assert_eq!(collector.values(), vec![2.0, 3.0]);
        assert!(collector.is_completed());
    }
}
