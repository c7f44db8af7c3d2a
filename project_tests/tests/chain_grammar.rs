//! Randomized operator chains checked against a plain `Vec` model.
//!
//! Every generated chain must produce a well-formed, terminated stream, and
//! its exact notifications must match what the same stages do to a list.

use lib_rx::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum SourceSpec {
    Of(Vec<i32>),
    Empty,
    Throw,
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Skip(usize),
    Take(usize),
    Offset(i32),
    RejectValue(i32),
    Abs,
    KeepEven,
}

fn arb_source() -> impl Strategy<Value = SourceSpec> {
    prop_oneof![
        4 => prop::collection::vec(-30i32..30, 0..20).prop_map(SourceSpec::Of),
        1 => Just(SourceSpec::Empty),
        1 => Just(SourceSpec::Throw),
    ]
}

fn arb_stage() -> impl Strategy<Value = Stage> {
    prop_oneof![
        (0usize..8).prop_map(Stage::Skip),
        (0usize..8).prop_map(Stage::Take),
        (-10i32..10).prop_map(Stage::Offset),
        (-30i32..30).prop_map(Stage::RejectValue),
        Just(Stage::Abs),
        Just(Stage::KeepEven),
    ]
}

fn rejected(value: i32) -> RxError {
    RxError::transform(format!("rejected {}", value))
}

fn build(source: &SourceSpec, stages: &[Stage]) -> Observable<i32> {
    let mut chain = match source {
        SourceSpec::Of(values) => of(values.clone()),
        SourceSpec::Empty => empty(),
        SourceSpec::Throw => throw(RxError::producer("generated")),
    };
    for stage in stages {
        chain = match *stage {
            Stage::Skip(n) => chain.skip(n),
            Stage::Take(n) => chain.take(n),
            Stage::Offset(k) => chain.map(move |v: i32| v + k),
            Stage::RejectValue(bad) => {
                chain.try_map(move |v: i32| if v == bad { Err(rejected(v)) } else { Ok(v) })
            }
            Stage::Abs => chain.abs(),
            Stage::KeepEven => chain.filter(|v: &i32| v % 2 == 0),
        };
    }
    chain
}

/// What the chain should deliver, computed on a plain list.
fn model(source: &SourceSpec, stages: &[Stage]) -> Vec<Notification<i32>> {
    let (mut values, mut terminal) = match source {
        SourceSpec::Of(values) => (values.clone(), Notification::Complete),
        SourceSpec::Empty => (Vec::new(), Notification::Complete),
        SourceSpec::Throw => (Vec::new(), Notification::Error(RxError::producer("generated"))),
    };
    for stage in stages {
        match *stage {
            Stage::Skip(n) => {
                values.drain(..n.min(values.len()));
            }
            Stage::Take(n) => {
                // `take(0)` completes even over a failing source.
                if n <= values.len() {
                    values.truncate(n);
                    terminal = Notification::Complete;
                }
            }
            Stage::Offset(k) => values.iter_mut().for_each(|v| *v += k),
            Stage::RejectValue(bad) => {
                if let Some(pos) = values.iter().position(|v| *v == bad) {
                    values.truncate(pos);
                    terminal = Notification::Error(rejected(bad));
                }
            }
            Stage::Abs => values.iter_mut().for_each(|v| *v = v.abs()),
            Stage::KeepEven => values.retain(|v| v % 2 == 0),
        }
    }
    let mut expected: Vec<_> = values.into_iter().map(Notification::Next).collect();
    expected.push(terminal);
    expected
}

proptest! {
    #[test]
    fn random_chains_follow_the_grammar(source in arb_source(), stages in prop::collection::vec(arb_stage(), 0..6)) {
        let collector = Collector::new();
        build(&source, &stages).subscribe(collector.clone());

        prop_assert!(collector.is_well_formed());
        prop_assert!(collector.is_terminated());
        prop_assert_eq!(collector.notifications(), model(&source, &stages));
    }

    #[test]
    fn skip_take_window_matches_slice(values in prop::collection::vec(any::<i32>(), 0..40), skip_n in 0usize..50, take_n in 1usize..50) {
        let collector = Collector::new();
        of(values.clone()).skip(skip_n).take(take_n).subscribe(collector.clone());

        let start = skip_n.min(values.len());
        let end = (start + take_n).min(values.len());
        prop_assert_eq!(collector.values(), values[start..end].to_vec());
        prop_assert!(collector.is_completed());
    }

    #[test]
    fn resubscribing_replays_the_same_stream(source in arb_source(), stages in prop::collection::vec(arb_stage(), 0..6)) {
        let chain = build(&source, &stages);
        let first = Collector::new();
        let second = Collector::new();
        chain.subscribe(first.clone());
        chain.subscribe(second.clone());

        prop_assert_eq!(first.notifications(), second.notifications());
    }
}
