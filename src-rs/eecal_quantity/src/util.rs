//! Floating point helpers shared by the tests of every eecal crate

const TOLERANCE: f64 = 1e-10;

/// Checks if two floating point numbers are close to each other.
///
/// The difference may be within either a relative or an absolute tolerance,
/// both fixed at 1e-10.
#[must_use]
pub const fn is_close(a: f64, b: f64) -> bool {
    #[expect(
        clippy::float_cmp,
        reason = "this is a part of implementing better floating point comparison"
    )]
    if a == b {
        return true;
    }

    if a.is_infinite() || b.is_infinite() {
        return false;
    }

    if a.is_nan() || b.is_nan() {
        return false;
    }

    let difference = (a - b).abs();
    let relative_tolerance = TOLERANCE * f64::min(a.abs(), b.abs());
    let absolute_tolerance = TOLERANCE;

    difference <= relative_tolerance || difference <= absolute_tolerance
}

/// Asserts that two floating point numbers are close, see [`is_close`].
#[macro_export]
macro_rules! assert_is_close {
    ($expected:expr, $actual:expr) => {
        assert!(
            $crate::util::is_close($expected, $actual),
            "expected: {}, actual: {}",
            $expected,
            $actual
        );
    };
}
