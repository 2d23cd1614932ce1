use std::io::{self, Write};

use crate::error::ApproxError;
use crate::network::Network;

/// Reject inverted or non-finite domain bounds. Runs before any training.
pub fn validate_domain(min: f32, max: f32) -> Result<(), ApproxError> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(ApproxError::InvalidDomain { min, max });
    }
    Ok(())
}

/// Evaluate the trained network at `steps + 1` evenly spaced points from
/// `min` to `max` inclusive, in ascending order.
///
/// Positions are computed from the index rather than by accumulating the
/// step, so the point count is exact and spacing does not drift.
pub fn sweep(net: &Network, min: f32, max: f32, steps: usize) -> Result<Vec<(f32, f32)>, ApproxError> {
    validate_domain(min, max)?;
    // A zero interval count would divide by zero; clamp to one interval.
    let steps = steps.max(1);
    let step = (max - min) / steps as f32;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let x = min + i as f32 * step;
        points.push((x, net.predict(x)));
    }
    Ok(points)
}

/// Render points one per line as `"<x> <y>"`, full float precision, ready
/// for piping into a plotting tool.
pub fn render<W: Write>(points: &[(f32, f32)], w: &mut W) -> io::Result<()> {
    for (x, y) in points {
        writeln!(w, "{} {}", x, y)?;
    }
    Ok(())
}
