//! # Pipe
//!
//! Left-to-right operator composition. `pipe!(source, a, b, c)` is
//! `c(b(a(source)))`, with each stage's input type checked against the previous
//! stage's output at compile time.

use crate::core::observable::Observable;

/// A function from one observable to another.
pub trait Operator<A, B> {
    /// Wraps `source` into the derived observable.
    fn apply(self, source: Observable<A>) -> Observable<B>;
}

impl<A, B, F> Operator<A, B> for F
where
    F: FnOnce(Observable<A>) -> Observable<B>,
{
    fn apply(self, source: Observable<A>) -> Observable<B> {
        self(source)
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Applies one operator.
    pub fn pipe<B, Op>(self, operator: Op) -> Observable<B>
    where
        Op: Operator<T, B>,
    {
        operator.apply(self)
    }
}

/// Composes a source with any number of operators, left to right.
///
/// ```
/// use lib_rx::prelude::*;
///
/// let doubled_tail = lib_rx::pipe!(of(vec![1, 2, 3, 4, 5]), skip(2), take(2), map(|x: i32| x * 2));
/// let collector = Collector::new();
/// doubled_tail.subscribe(collector.clone());
/// assert_eq!(collector.values(), vec![6, 8]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($source:expr $(, $operator:expr)* $(,)?) => {{
        let observable = $source;
        $(
            let observable = $crate::core::Observable::pipe(observable, $operator);
        )*
        observable
    }};
}
