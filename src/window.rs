use crate::Price;

/// Applies `f` to every trailing window of `length` values.
///
/// The first `length - 1` positions are `None`, as is every position whose
/// window contains a missing value. `f` may itself return `None` (e.g. a
/// degenerate statistic).
pub(crate) fn rolling<F>(values: &[Option<Price>], length: usize, mut f: F) -> Vec<Option<Price>>
where
    F: FnMut(&[Price]) -> Option<Price>,
{
    debug_assert!(length > 0, "window length must be positive");

    let mut window = Vec::with_capacity(length);

    (0..values.len())
        .map(|i| {
            let start = (i + 1).checked_sub(length)?;
            window.clear();
            for value in &values[start..=i] {
                window.push((*value)?);
            }
            f(&window)
        })
        .collect()
}

#[inline]
pub(crate) fn sum(window: &[Price]) -> Option<Price> {
    Some(window.iter().sum())
}

#[inline]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(window: &[Price]) -> Option<Price> {
    Some(window.iter().sum::<Price>() / window.len() as f64)
}

/// Middle value; the mean of the two middle values for even windows.
pub(crate) fn median(window: &[Price]) -> Option<Price> {
    let mut sorted = window.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (`n - 1` denominator). `None` for a single value.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn sample_std(window: &[Price]) -> Option<Price> {
    if window.len() < 2 {
        return None;
    }

    let n = window.len() as f64;
    let mean = window.iter().sum::<Price>() / n;
    let squares: f64 = window.iter().map(|x| (x - mean) * (x - mean)).sum();

    Some((squares / (n - 1.0)).sqrt())
}

#[inline]
pub(crate) fn max(window: &[Price]) -> Option<Price> {
    window.iter().copied().reduce(f64::max)
}

#[inline]
pub(crate) fn min(window: &[Price]) -> Option<Price> {
    window.iter().copied().reduce(f64::min)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<Price>> {
        values.iter().copied().map(Some).collect()
    }

    mod filling {
        use super::*;

        #[test]
        fn none_until_window_full() {
            let out = rolling(&some(&[1.0, 2.0, 3.0, 4.0]), 3, sum);
            assert_eq!(out, vec![None, None, Some(6.0), Some(9.0)]);
        }

        #[test]
        fn window_size_one_is_identity() {
            let out = rolling(&some(&[1.0, 2.0]), 1, sum);
            assert_eq!(out, vec![Some(1.0), Some(2.0)]);
        }

        #[test]
        fn window_longer_than_input() {
            let out = rolling(&some(&[1.0, 2.0]), 3, sum);
            assert_eq!(out, vec![None, None]);
        }
    }

    mod gaps {
        use super::*;

        #[test]
        fn missing_value_poisons_every_window_it_touches() {
            let values = vec![Some(1.0), None, Some(3.0), Some(4.0), Some(5.0)];
            let out = rolling(&values, 2, sum);
            assert_eq!(out, vec![None, None, None, Some(7.0), Some(9.0)]);
        }
    }

    mod statistics {
        use super::*;

        #[test]
        fn mean_of_window() {
            assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
        }

        #[test]
        fn median_odd() {
            assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        }

        #[test]
        fn median_even_averages_middle_pair() {
            assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        }

        #[test]
        fn sample_std_uses_n_minus_one() {
            // mean = 5, squares = 9 + 1 + 1 + 9 = 20, 20 / 3
            let std = sample_std(&[2.0, 4.0, 6.0, 8.0]).unwrap();
            assert!((std - (20.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        }

        #[test]
        fn sample_std_undefined_for_one_value() {
            assert_eq!(sample_std(&[2.0]), None);
        }

        #[test]
        fn extremes() {
            assert_eq!(max(&[1.0, 7.0, 3.0]), Some(7.0));
            assert_eq!(min(&[1.0, 7.0, -3.0]), Some(-3.0));
        }
    }
}
