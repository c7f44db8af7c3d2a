//! # Map
//!
//! Stateless per-value transformation. `map` cannot fail; `try_map` turns a
//! failing application into a terminal `Transform` error, cancels upstream and
//! drops every later value.

use std::sync::Arc;

use crate::core::{Observable, Observer, Operator, RxError, Subscriber, Subscription};

/// Operator returned by [`map`].
pub struct Map<F> {
    f: F,
}

/// Applies `f` to every value. Termination passes through unchanged.
pub fn map<F>(f: F) -> Map<F> {
    Map { f }
}

impl<A, B, F> Operator<A, B> for Map<F>
where
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    fn apply(self, source: Observable<A>) -> Observable<B> {
        let f = Arc::new(self.f);
        source.lift(move |downstream, _upstream| MapObserver {
            f: Arc::clone(&f),
            downstream,
        })
    }
}

struct MapObserver<F, B> {
    f: Arc<F>,
    downstream: Subscriber<B>,
}

impl<A, B, F> Observer<A> for MapObserver<F, B>
where
    B: Send + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    fn on_next(&mut self, value: A) {
        self.downstream.next((self.f)(value));
    }

    fn on_error(&mut self, err: RxError) {
        self.downstream.error(err);
    }

    fn on_complete(&mut self) {
        self.downstream.complete();
    }
}

/// Operator returned by [`try_map`].
pub struct TryMap<F> {
    f: F,
}

/// Applies a fallible `f` to every value.
///
/// The first `Err` is converted into an [`RxError`] (plain strings become
/// [`RxError::Transform`]), upstream is cancelled, and the error is delivered.
/// No `Next` is ever emitted for a failing application.
pub fn try_map<F>(f: F) -> TryMap<F> {
    TryMap { f }
}

impl<A, B, E, F> Operator<A, B> for TryMap<F>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Into<RxError>,
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    fn apply(self, source: Observable<A>) -> Observable<B> {
        let f = Arc::new(self.f);
        source.lift(move |downstream, upstream| TryMapObserver {
            f: Arc::clone(&f),
            downstream,
            upstream,
            failed: false,
        })
    }
}

struct TryMapObserver<F, B> {
    f: Arc<F>,
    downstream: Subscriber<B>,
    upstream: Subscription,
    failed: bool,
}

impl<A, B, E, F> Observer<A> for TryMapObserver<F, B>
where
    B: Send + 'static,
    E: Into<RxError>,
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    fn on_next(&mut self, value: A) {
        if self.failed {
            return;
        }
        match (self.f)(value) {
            Ok(mapped) => self.downstream.next(mapped),
            Err(e) => {
                self.failed = true;
                let err = e.into();
                log::debug!("Transform failed, cancelling upstream: {}", err);
                self.upstream.unsubscribe();
                self.downstream.error(err);
            }
        }
    }

    fn on_error(&mut self, err: RxError) {
        self.downstream.error(err);
    }

    fn on_complete(&mut self) {
        self.downstream.complete();
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Method form of [`map`].
    pub fn map<B, F>(self, f: F) -> Observable<B>
    where
        B: Send + 'static,
        F: Fn(T) -> B + Send + Sync + 'static,
    {
        self.pipe(map(f))
    }

    /// Method form of [`try_map`].
    pub fn try_map<B, E, F>(self, f: F) -> Observable<B>
    where
        B: Send + 'static,
        E: Into<RxError>,
        F: Fn(T) -> Result<B, E> + Send + Sync + 'static,
    {
        self.pipe(try_map(f))
    }
}
