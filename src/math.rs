//! Math utility functions.

use num_traits::Float;

/// Bring a value into the unit interval. NaN becomes 0.
pub fn normalize<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Bring a circular value into [0, 1). NaN becomes 0.
pub fn normalize_circular<T: Float>(value: T) -> T {
    if !value.is_finite() {
        return T::zero();
    }
    let wrapped = value % T::one();
    let wrapped = if wrapped < T::zero() {
        wrapped + T::one()
    } else {
        wrapped
    };
    // -tiny + 1.0 can round up to exactly 1.0.
    if wrapped >= T::one() {
        T::zero()
    } else {
        wrapped
    }
}
