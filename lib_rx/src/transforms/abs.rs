//! # Abs
//!
//! Absolute value over signed numbers, expressed as a fallible map.
//!
//! Floats follow IEEE sign removal: `-0.0` becomes `0.0`, `-inf` becomes
//! `inf`, and NaN stays NaN without raising an error. Signed integers have no
//! representable absolute value for `MIN`; that input terminates the stream with
//! a `Transform` error instead of wrapping or panicking.

use crate::core::{Observable, Operator, RxError};
use crate::transforms::map::try_map;

/// Signed numeric types that have an absolute value.
pub trait Absolute: Sized + Send + 'static {
    /// The absolute value, or an error when it is not representable.
    fn try_abs(self) -> Result<Self, RxError>;
}

macro_rules! impl_absolute_int {
    ($($t:ty),*) => {
        $(
            impl Absolute for $t {
                fn try_abs(self) -> Result<Self, RxError> {
                    self.checked_abs().ok_or_else(|| {
                        RxError::transform(format!(
                            "absolute value of {} overflows {}",
                            self,
                            stringify!($t)
                        ))
                    })
                }
            }
        )*
    };
}

macro_rules! impl_absolute_float {
    ($($t:ty),*) => {
        $(
            impl Absolute for $t {
                fn try_abs(self) -> Result<Self, RxError> {
                    Ok(self.abs())
                }
            }
        )*
    };
}

impl_absolute_int!(i8, i16, i32, i64, i128, isize);
impl_absolute_float!(f32, f64);

/// Operator returned by [`abs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

/// Replaces every number with its absolute value.
pub fn abs() -> Abs {
    Abs
}

impl<T: Absolute> Operator<T, T> for Abs {
    fn apply(self, source: Observable<T>) -> Observable<T> {
        source.pipe(try_map(T::try_abs))
    }
}

impl<T: Absolute> Observable<T> {
    /// Method form of [`abs`].
    pub fn abs(self) -> Observable<T> {
        self.pipe(abs())
    }
}
