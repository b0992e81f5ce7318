//! Geometric utility functions for neighbor filtering and boundary handling.

use geo::{Intersects, Rect, coord};
use ndarray::Array1;

/// Axis-aligned square of total width `width` centered on `center`.
pub fn square_around(center: &Array1<f32>, width: f32) -> Rect<f32> {
    let half = width * 0.5;
    Rect::new(
        coord! { x: center[0] - half, y: center[1] - half },
        coord! { x: center[0] + half, y: center[1] + half },
    )
}

/// Checks if `pos` lies inside `rect`, edges included.
pub fn contains_inclusive(rect: &Rect<f32>, pos: &Array1<f32>) -> bool {
    rect.intersects(&coord! { x: pos[0], y: pos[1] })
}

/// Negates every coordinate that lies outside `[min, max]`.
///
/// This is a reflection through the origin, not a modular wrap: a coordinate
/// far outside the bounds can still be outside after negation.
pub fn reflect_out_of_bounds_mut(v: &mut Array1<f32>, min: f32, max: f32) {
    v.mapv_inplace(|c| if c > max || c < min { -c } else { c });
}

/// Returns `v / |v|`, or `None` when the length is zero or not finite.
pub fn try_normalize(v: &Array1<f32>) -> Option<Array1<f32>> {
    let mag = v.dot(v).sqrt();
    (mag > 0.0 && mag.is_finite()).then(|| v / mag)
}
