//! Polynomial root solvers used by the edge-segment kernel.
//!
//! Returned roots are finite and unordered, without multiplicity. Degenerate
//! leading coefficients fall back to the lower-degree solver per §4.1.

/// Up to 2 real roots for a quadratic.
pub type Roots2 = Vec<f64>;
/// Up to 3 real roots for a cubic.
pub type Roots3 = Vec<f64>;

/// Solve `a*x^2 + b*x + c = 0`.
///
/// `a` is treated as zero when `|b| > 1e12 * |a|` (numerical degeneracy
/// criterion from §4.1), in which case this falls back to the linear case.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots2 {
    let mut roots = Roots2::new();

    if a == 0.0 || b.abs() > 1e12 * a.abs() {
        // Linear fallback: b*x + c = 0
        if b == 0.0 {
            return roots;
        }
        roots.push(-c / b);
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return roots;
    }
    if discriminant == 0.0 {
        roots.push(-b / (2.0 * a));
        return roots;
    }
    let sqrt_d = discriminant.sqrt();
    // Numerically stable form, order is arbitrary per spec.
    roots.push((-b + sqrt_d) / (2.0 * a));
    roots.push((-b - sqrt_d) / (2.0 * a));
    roots
}

/// Solve `a*x^3 + b*x^2 + c*x + d = 0`.
///
/// Falls back to the quadratic solver when `a == 0` or `|b/a| > 1e6`.
/// Otherwise solves via the depressed cubic, using the trigonometric form
/// for three real roots and the Cardano form otherwise.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots3 {
    let mut roots = Roots3::new();

    if a == 0.0 || (b / a).abs() > 1e6 {
        for r in solve_quadratic(b, c, d) {
            roots.push(r);
        }
        return roots;
    }

    // Normalize to x^3 + A x^2 + B x + C = 0
    let inv_a = 1.0 / a;
    let aa = b * inv_a;
    let bb = c * inv_a;
    let cc = d * inv_a;

    // Depress: x = t - aa/3
    let shift = aa / 3.0;
    let p = bb - aa * aa / 3.0;
    let q = (2.0 * aa * aa * aa) / 27.0 - (aa * bb) / 3.0 + cc;

    if p == 0.0 && q == 0.0 {
        roots.push(-shift);
        return roots;
    }

    let discriminant = (q * q) / 4.0 + (p * p * p) / 27.0;

    if discriminant < 0.0 {
        // Three distinct real roots: trigonometric form.
        let r = (-(p * p * p) / 27.0).sqrt();
        let cos_arg = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cos_arg.acos();
        let t = 2.0 * r.cbrt();
        roots.push(t * (phi / 3.0).cos() - shift);
        roots.push(t * ((phi + 2.0 * std::f64::consts::PI) / 3.0).cos() - shift);
        roots.push(t * ((phi + 4.0 * std::f64::consts::PI) / 3.0).cos() - shift);
    } else {
        // Cardano algebraic form.
        let sqrt_disc = discriminant.sqrt();
        let u = cbrt_signed(-q / 2.0 + sqrt_disc);
        let v = cbrt_signed(-q / 2.0 - sqrt_disc);
        roots.push(u + v - shift);
        if (u + v).abs() * 1e-12 >= (u - v).abs() || discriminant == 0.0 {
            // u == v within tolerance: double root.
            roots.push(-(u + v) / 2.0 - shift);
        }
    }
    roots
}

fn cbrt_signed(x: f64) -> f64 {
    x.cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_quad(a: f64, b: f64, c: f64, x: f64) -> f64 {
        a * x * x + b * x + c
    }

    fn eval_cubic(a: f64, b: f64, c: f64, d: f64, x: f64) -> f64 {
        a * x * x * x + b * x * x + c * x + d
    }

    #[test]
    fn quadratic_two_roots() {
        let roots = solve_quadratic(1.0, -3.0, 2.0);
        assert_eq!(roots.len(), 2);
        for r in &roots {
            assert!(eval_quad(1.0, -3.0, 2.0, *r).abs() < 1e-9);
        }
    }

    #[test]
    fn quadratic_no_roots() {
        let roots = solve_quadratic(1.0, 0.0, 1.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn quadratic_degenerate_linear_fallback() {
        let roots = solve_quadratic(0.0, 2.0, -4.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn quadratic_fully_degenerate() {
        let roots = solve_quadratic(0.0, 0.0, 5.0);
        assert!(roots.is_empty());
    }

    #[test]
    fn cubic_three_real_roots() {
        // (x-1)(x-2)(x-3) = x^3 - 6x^2 + 11x - 6
        let roots = solve_cubic(1.0, -6.0, 11.0, -6.0);
        assert_eq!(roots.len(), 3);
        let mut sorted: Vec<f64> = roots.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((sorted[0] - 1.0).abs() < 1e-6);
        assert!((sorted[1] - 2.0).abs() < 1e-6);
        assert!((sorted[2] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn cubic_one_real_root() {
        // x^3 + 1 = 0  -> x = -1, plus two complex roots
        let roots = solve_cubic(1.0, 0.0, 0.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cubic_degenerate_quadratic_fallback() {
        let roots = solve_cubic(0.0, 1.0, -3.0, 2.0);
        assert_eq!(roots.len(), 2);
        for r in &roots {
            assert!(eval_cubic(0.0, 1.0, -3.0, 2.0, *r).abs() < 1e-9);
        }
    }
}
