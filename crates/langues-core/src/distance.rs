// ─────────────────────────────────────────────────────────────────────
// SCBE-AETHERMOORE — Langues Distance and Metric Tensor
// ─────────────────────────────────────────────────────────────────────
//! Anisotropic distance on the 6D hyperspace.
//!
//! d(x, y)² = Σ_l w_l (x_l − y_l)² = (x − y)ᵀ G (x − y), with
//! G = diag(w_0 … w_5). Higher tongues stretch their axis by φ^l.

use langues_types::{HyperspacePoint, N_DIMS};

use crate::metric::LanguesMetric;
use crate::params::TONGUE_WEIGHTS;

/// Langues-weighted distance between two points.
///
/// The metric, when given, only supplies the weight table; its growth
/// rates and ideal state play no part.
pub fn langues_distance(
    x1: &HyperspacePoint,
    x2: &HyperspacePoint,
    metric: Option<&LanguesMetric>,
) -> f64 {
    let weights = metric.map_or(&TONGUE_WEIGHTS, LanguesMetric::weights);
    let v1 = x1.to_vector();
    let v2 = x2.to_vector();

    let d_sq: f64 = weights
        .iter()
        .zip(v1.iter().zip(v2.iter()))
        .map(|(w, (a, b))| w * (a - b) * (a - b))
        .sum();
    d_sq.sqrt()
}

/// Build the 6×6 langues metric tensor G_ij.
///
/// Diagonal with G_ii = w_i = φ^i; zero elsewhere.
pub fn build_langues_metric_matrix() -> [[f64; N_DIMS]; N_DIMS] {
    let mut g = [[0.0f64; N_DIMS]; N_DIMS];
    for (i, row) in g.iter_mut().enumerate() {
        row[i] = TONGUE_WEIGHTS[i];
    }
    g
}

/// Weighted inner product ⟨u, v⟩ = Σ_ij G_ij u_i v_j.
pub fn langues_inner_product(u: &[f64; N_DIMS], v: &[f64; N_DIMS]) -> f64 {
    let g = build_langues_metric_matrix();
    let mut acc = 0.0;
    for (i, row) in g.iter().enumerate() {
        for (j, &g_ij) in row.iter().enumerate() {
            acc += g_ij * u[i] * v[j];
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use langues_types::IdealState;

    /// xorshift64 for sampled triples.
    struct SimpleRng(u64);

    impl SimpleRng {
        fn next_f64(&mut self) -> f64 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            self.0 = x;
            (x >> 11) as f64 / (1u64 << 53) as f64
        }

        fn point(&mut self, span: f64) -> HyperspacePoint {
            HyperspacePoint::from_vector(std::array::from_fn(|_| (self.next_f64() - 0.5) * span))
        }
    }

    fn pts() -> [HyperspacePoint; 3] {
        [
            HyperspacePoint::default(),
            HyperspacePoint::new(0.0, 1.5, 0.1, 0.2, 0.9, 0.8),
            HyperspacePoint::new(3.0, -0.4, 0.5, 0.9, 0.1, 0.2),
        ]
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for p in pts() {
            assert_eq!(langues_distance(&p, &p, None), 0.0);
        }
    }

    #[test]
    fn test_distance_symmetric() {
        let [a, b, c] = pts();
        assert_eq!(langues_distance(&a, &b, None), langues_distance(&b, &a, None));
        assert_eq!(langues_distance(&b, &c, None), langues_distance(&c, &b, None));
    }

    #[test]
    fn test_triangle_inequality() {
        let [a, b, c] = pts();
        let ab = langues_distance(&a, &b, None);
        let bc = langues_distance(&b, &c, None);
        let ac = langues_distance(&a, &c, None);
        assert!(ac <= ab + bc + 1e-12);
        assert!(ab <= ac + bc + 1e-12);
        assert!(bc <= ab + ac + 1e-12);
    }

    #[test]
    fn test_triangle_inequality_sampled() {
        let mut rng = SimpleRng(0x7A1A_6E1E_D15C_0003);
        for i in 0..500 {
            let span = if i % 2 == 0 { 2.0 } else { 200.0 };
            let (a, b, c) = (rng.point(span), rng.point(span), rng.point(span));
            let ab = langues_distance(&a, &b, None);
            let bc = langues_distance(&b, &c, None);
            let ac = langues_distance(&a, &c, None);
            let tol = 1e-9 * (ab + bc + ac).max(1.0);
            assert!(ac <= ab + bc + tol, "sample {i}: {ac} > {ab} + {bc}");
            assert!(ab <= ac + bc + tol, "sample {i}: {ab} > {ac} + {bc}");
            assert!(bc <= ab + ac + tol, "sample {i}: {bc} > {ab} + {ac}");
            assert_eq!(ab, langues_distance(&b, &a, None), "sample {i}: asymmetric");
        }
    }

    #[test]
    fn test_nonzero_when_any_field_differs() {
        let a = HyperspacePoint::default();
        let b = HyperspacePoint {
            entropy: a.entropy + 1e-3,
            ..a
        };
        assert!(langues_distance(&a, &b, None) > 0.0);
    }

    #[test]
    fn test_axis_weighting() {
        let origin = HyperspacePoint::from_vector([0.0; N_DIMS]);
        for l in 0..N_DIMS {
            let mut v = [0.0; N_DIMS];
            v[l] = 1.0;
            let d = langues_distance(&origin, &HyperspacePoint::from_vector(v), None);
            assert!((d - TONGUE_WEIGHTS[l].sqrt()).abs() < 1e-12, "axis {l}: {d}");
        }
    }

    #[test]
    fn test_metric_argument_only_supplies_weights() {
        let [a, b, _] = pts();
        let m = LanguesMetric::new(langues_types::MetricConfig {
            beta_base: 3.0,
            clamp_max: 10.0,
            ideal: IdealState {
                trust: 0.0,
                ..Default::default()
            },
        })
        .unwrap();
        assert_eq!(
            langues_distance(&a, &b, Some(&m)),
            langues_distance(&a, &b, None)
        );
    }

    #[test]
    fn test_matrix_is_diagonal_weights() {
        let g = build_langues_metric_matrix();
        for i in 0..N_DIMS {
            for j in 0..N_DIMS {
                if i == j {
                    assert_eq!(g[i][j], TONGUE_WEIGHTS[i]);
                } else {
                    assert_eq!(g[i][j], 0.0, "G[{i},{j}] should be 0");
                }
            }
        }
    }

    #[test]
    fn test_matrix_reproduces_distance() {
        let [a, b, _] = pts();
        let (va, vb) = (a.to_vector(), b.to_vector());
        let delta: [f64; N_DIMS] = std::array::from_fn(|l| va[l] - vb[l]);
        let quad = langues_inner_product(&delta, &delta);
        let d = langues_distance(&a, &b, None);
        assert!((quad - d * d).abs() < 1e-12);
    }
}
