//! Pairwise Newtonian gravity
//!
//! Direct O(n²) summation over unordered pairs. The body count in an
//! interactive scene is small, so no spatial index is used; the slice-based
//! call shape leaves room for one behind the same signature.

use super::BodyState;
use super::math::{Scalar, Vector};

/// Accumulate net gravitational acceleration for every body into `out`,
/// excluding self-interaction:
///
/// ```text
/// a_i += gamma * m_j * (x_j - x_i) / |x_j - x_i|³   for all j ≠ i
/// ```
///
/// A numerically coincident pair contributes exactly zero, so close
/// encounters can never divide by zero. Massless bodies pick up
/// acceleration from every other body but contribute none themselves.
pub fn accumulate_accelerations(bodies: &[BodyState], gamma: Scalar, out: &mut [Vector]) {
    debug_assert_eq!(bodies.len(), out.len());

    for acceleration in out.iter_mut() {
        *acceleration = Vector::ZERO;
    }

    let n = bodies.len();
    for i in 0..n {
        let xi = bodies[i].position;
        let mi = bodies[i].mass;

        for j in (i + 1)..n {
            let xj = bodies[j].position;
            let mj = bodies[j].mass;

            let r = xj - xi;
            let r2 = r.length_squared();
            // Coincident bodies exert no force on each other
            if r2 <= 0.0 {
                continue;
            }

            let inv_r = r2.sqrt().recip();
            let inv_r3 = inv_r * inv_r * inv_r;
            let coef = gamma * inv_r3;

            // Equal and opposite: i is pulled along +r, j along -r
            out[i] += coef * mj * r;
            out[j] -= coef * mi * r;
        }
    }
}
