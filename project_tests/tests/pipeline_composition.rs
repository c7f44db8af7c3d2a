//! End-to-end checks on synchronous pipelines built from the public prelude.

use lib_rx::prelude::*;

fn run<T: Clone + Send + 'static>(source: &Observable<T>) -> Collector<T> {
    let collector = Collector::new();
    source.subscribe(collector.clone());
    collector
}

#[test]
fn test_skip_then_take_selects_a_window() {
    let collector = run(&of(0..10).skip(3).take(2));
    assert_eq!(
        collector.notifications(),
        vec![Notification::Next(3), Notification::Next(4), Notification::Complete]
    );
}

#[test]
fn test_skip_beyond_length_only_completes() {
    let collector = run(&of(vec![1, 2, 3]).skip(5));
    assert_eq!(collector.notifications(), vec![Notification::Complete]);
}

#[test]
fn test_take_more_than_available_completes_with_source() {
    let collector = run(&of(vec![1, 2]).take(5));
    assert_eq!(
        collector.notifications(),
        vec![Notification::Next(1), Notification::Next(2), Notification::Complete]
    );
}

#[test]
fn test_take_zero_on_a_sync_source() {
    let collector = run(&of(vec![1, 2, 3]).take(0));
    assert_eq!(collector.notifications(), vec![Notification::Complete]);
}

#[test]
fn test_failing_transform_terminates_with_error() {
    let source = of(vec![1, 2, 3]).try_map(|x: i32| if x == 2 { Err("two is not allowed") } else { Ok(x * 10) });
    let collector = run(&source);
    assert_eq!(
        collector.notifications(),
        vec![
            Notification::Next(10),
            Notification::Error(RxError::transform("two is not allowed")),
        ]
    );
}

#[test]
fn test_abs_on_mixed_signs() {
    let collector = run(&of(vec![-1.5f64, 0.0, 2.25, -7.0]).abs());
    assert_eq!(collector.values(), vec![1.5, 0.0, 2.25, 7.0]);
    assert!(collector.is_completed());
}

#[test]
fn test_abs_of_integer_minimum_is_an_error() {
    let collector = run(&of(vec![-3i32, i32::MIN, 4]).abs());
    assert_eq!(collector.values(), vec![3]);
    assert!(matches!(collector.error(), Some(RxError::Transform(_))));
}

#[test]
fn test_error_source_passes_through_operators() {
    let source = pipe!(throw::<i32>(RxError::producer("boom")), map(|x: i32| x + 1), skip(1), take(3));
    let collector = run(&source);
    assert_eq!(collector.notifications(), vec![Notification::Error(RxError::producer("boom"))]);
}

#[test]
fn test_empty_source_passes_through_operators() {
    let collector = run(&empty::<i32>().skip(2).take(1).map(|x: i32| x * 2));
    assert_eq!(collector.notifications(), vec![Notification::Complete]);
}

#[test]
fn test_cold_replay_gives_independent_runs() {
    let source = of(vec![1, 2, 3]).map(|x: i32| x * x).take(2);
    let first = run(&source);
    let second = run(&source);
    assert_eq!(first.notifications(), second.notifications());
    assert_eq!(first.values(), vec![1, 4]);
}

#[test]
fn test_never_stays_open_until_cancelled() {
    let collector = Collector::<i32>::new();
    let subscription = never::<i32>().map(|x: i32| x).subscribe(collector.clone());
    assert!(!subscription.is_closed());
    subscription.unsubscribe();
    assert!(subscription.is_closed());
    assert!(collector.is_empty());
}
