//! Fixed-step integration of force per unit length over elevation

use log::debug;
use nalgebra::Vector2;

use crate::error::{LoadError, LoadResult};
use crate::loads::ForceSample;
use crate::profile::{round_to_hundredths, validate_step};

/// Integrate a force-per-length function from `lower` to `upper`
///
/// Left-rectangle rule: `force` is evaluated at `lower`, `lower + step`, ... while the
/// elevation does not exceed `upper`, and each sample contributes `sample * step`.
/// The elevation is rounded to 2 decimals after every step, so `step` has to match
/// the tabulation spacing of the profile behind `force`. Steps that are not a
/// positive multiple of 0.01 m are rejected, as they would never advance.
///
/// # Returns
/// `[drag, inertia]` totals (N). Zero when `lower > upper`.
pub fn integrate<F>(lower: f64, upper: f64, step: f64, mut force: F) -> LoadResult<Vector2<f64>>
where
    F: FnMut(f64) -> LoadResult<ForceSample>,
{
    validate_step(step)?;
    if !(lower.is_finite() && upper.is_finite()) {
        return Err(LoadError::InvalidInput(format!(
            "integration bounds must be finite, got [{lower}, {upper}]"
        )));
    }

    let mut total = Vector2::zeros();
    let mut current = lower;
    let mut evaluations = 0usize;

    while current <= upper {
        total += force(current)?.as_vector() * step;
        evaluations += 1;
        current = round_to_hundredths(current + step);
    }

    debug!(
        "Integrated [{}, {}] at step {}: {} evaluations",
        lower, upper, step, evaluations
    );

    Ok(total)
}
