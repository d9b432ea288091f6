//! Adaptive numerical integration by the composite Simpson's rule.

use log::debug;

use crate::error::IntegrateError;

/// Segment count the adaptive loop starts from.
const INITIAL_SEGMENTS: u32 = 10;

/// Approximates the definite integral of `f` over `[lower, upper]`.
///
/// Computes a composite Simpson approximation with [`INITIAL_SEGMENTS`]
/// segments, then doubles the segment count until two successive
/// approximations differ by at most `max_error`, returning the finer one.
///
/// Fails with [`IntegrateError::InvalidRange`] when `lower > upper` and with
/// [`IntegrateError::InvalidTolerance`] when `max_error <= 0`; in both cases
/// `f` is never called.
///
/// There is no iteration cap: for an integrand whose successive
/// approximations never come within `max_error` of each other, the loop does
/// not terminate.
pub fn integrate<F>(f: F, lower: f64, upper: f64, max_error: f64) -> Result<f64, IntegrateError>
where
    F: Fn(f64) -> f64,
{
    if lower > upper {
        return Err(IntegrateError::InvalidRange { lower, upper });
    }
    if max_error <= 0.0 {
        return Err(IntegrateError::InvalidTolerance(max_error));
    }

    let mut segments = INITIAL_SEGMENTS;
    let mut coarse = composite_simpson(&f, lower, upper, segments);

    loop {
        let fine = composite_simpson(&f, lower, upper, 2 * segments);
        debug!("integrate: segments = {}, coarse = {}, fine = {}", segments, coarse, fine);
        if (fine - coarse).abs() <= max_error {
            return Ok(fine);
        }
        coarse = fine;
        segments *= 2;
    }
}

/// Composite Simpson's rule with a fixed number of segments.
///
/// With `m` segments over `[lo, hi]` and `w = (hi - lo) / m`:
///
/// ```text
/// w/3 * (f(lo) + 4 * sum f(odd interior) + 2 * sum f(even interior) + f(hi))
/// ```
fn composite_simpson<F>(f: &F, lower: f64, upper: f64, segments: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let width = (upper - lower) / f64::from(segments);

    let mut odd_sum = 0.0;
    for i in (1..segments).step_by(2) {
        odd_sum += f(lower + f64::from(i) * width);
    }
    let mut even_sum = 0.0;
    for i in (2..segments).step_by(2) {
        even_sum += f(lower + f64::from(i) * width);
    }

    width / 3.0 * (f(lower) + 4.0 * odd_sum + 2.0 * even_sum + f(upper))
}
