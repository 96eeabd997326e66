use crate::Price;

/// Smoothing factor for a span (`α = 2 / (span + 1)`), as used by EMA.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn span_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Smoothing factor for Wilder-style smoothing (`α = 1 / length`).
#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn wilder_alpha(length: usize) -> f64 {
    1.0 / length as f64
}

/// Exponentially weighted mean.
///
/// Output is `None` until the first observed value, then defined at every
/// position. A missing value keeps its slot: the weights of older
/// observations still decay across it, and the last mean is carried
/// forward.
///
/// With `adjust`, each output is `Σ (1 - α)^i · x[t - i] / Σ (1 - α)^i` over
/// the observed points, accumulated recursively. Without it, the plain
/// recursion `y = (1 - α)·y + α·x` is used.
#[allow(clippy::float_cmp)]
pub(crate) fn ewm(values: &[Option<Price>], alpha: f64, adjust: bool) -> Vec<Option<Price>> {
    debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha must be in (0, 1]");

    let decay = 1.0 - alpha;
    let new_weight = if adjust { 1.0 } else { alpha };

    let mut weighted: Option<Price> = None;
    let mut old_weight = 1.0;

    values
        .iter()
        .map(|value| {
            match (weighted, *value) {
                (Some(mean), observed) => {
                    old_weight *= decay;
                    if let Some(x) = observed {
                        if mean != x {
                            weighted = Some(
                                old_weight.mul_add(mean, new_weight * x)
                                    / (old_weight + new_weight),
                            );
                        }
                        old_weight = if adjust { old_weight + new_weight } else { 1.0 };
                    }
                }
                (None, Some(x)) => weighted = Some(x),
                (None, None) => {}
            }
            weighted
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::assert_approx;

    fn some(values: &[f64]) -> Vec<Option<Price>> {
        values.iter().copied().map(Some).collect()
    }

    mod alphas {
        use super::*;

        #[test]
        fn span() {
            assert_approx!(span_alpha(3), 0.5);
            assert_approx!(span_alpha(10), 2.0 / 11.0);
        }

        #[test]
        fn wilder() {
            assert_approx!(wilder_alpha(4), 0.25);
        }
    }

    mod adjusted {
        use super::*;

        #[test]
        fn first_value_is_first_observation() {
            let out = ewm(&some(&[4.0, 8.0]), 0.5, true);
            assert_eq!(out[0], Some(4.0));
        }

        #[test]
        fn matches_weighted_mean_definition() {
            // α = 0.5, weights 1, 0.5, 0.25 (newest first)
            let out = ewm(&some(&[1.0, 2.0, 3.0]), 0.5, true);
            // (2 + 0.5·1) / 1.5
            assert_approx!(out[1].unwrap(), 2.5 / 1.5);
            // (3 + 0.5·2 + 0.25·1) / 1.75
            assert_approx!(out[2].unwrap(), 4.25 / 1.75);
        }

        #[test]
        fn constant_input_stays_constant() {
            let out = ewm(&some(&[5.0; 20]), 0.2, true);
            assert!(out.iter().all(|v| *v == Some(5.0)));
        }

        #[test]
        fn leading_gaps_stay_empty() {
            let out = ewm(&[None, None, Some(2.0), Some(4.0)], 0.5, true);
            assert_eq!(out[0], None);
            assert_eq!(out[1], None);
            assert_eq!(out[2], Some(2.0));
            assert_approx!(out[3].unwrap(), 5.0 / 1.5);
        }

        #[test]
        fn gap_carries_value_and_ages_weights() {
            // x = [1, _, 3], α = 0.5: weight of 1 is 0.25 by the time 3 arrives
            let out = ewm(&[Some(1.0), None, Some(3.0)], 0.5, true);
            assert_eq!(out[1], Some(1.0));
            assert_approx!(out[2].unwrap(), 3.25 / 1.25);
        }
    }

    mod recursive {
        use super::*;

        #[test]
        fn plain_recursion_seeded_with_first_value() {
            // α = 0.5: 1, 1.5, 2.25, 3.125
            let out = ewm(&some(&[1.0, 2.0, 3.0, 4.0]), 0.5, false);
            assert_eq!(out, some(&[1.0, 1.5, 2.25, 3.125]));
        }

        #[test]
        fn alpha_one_tracks_input() {
            let out = ewm(&some(&[1.0, 2.0, 3.5]), 1.0, false);
            assert_eq!(out, some(&[1.0, 2.0, 3.5]));
        }
    }
}
