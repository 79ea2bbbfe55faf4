/// Check for equality between two components allowing for floating point
/// rounding errors.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $crate::test::EPSILON);
    }};
}

/// Tolerance used by [`assert_component_eq`].
#[cfg(not(feature = "f32"))]
pub const EPSILON: crate::Component = 1e-6;

/// Tolerance used by [`assert_component_eq`], allowing for 16-bit rounding
/// errors.
#[cfg(feature = "f32")]
pub const EPSILON: crate::Component = 1.0 / i16::MAX as crate::Component;
