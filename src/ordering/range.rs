//! Arithmetic progressions.

const MAX_LENGTH: f64 = 4_294_967_295.0;

/// Returns the arithmetic progression from `start` up to, but not including, `stop`.
///
/// With only the first argument it is the stop and the progression starts
/// at `0`; with none the result is empty. A missing, zero or `NaN` step is
/// `1`. The length is `max(ceil((stop - start) / step), 0)`. A length that
/// is not finite or exceeds `u32::MAX` gives an empty progression
/// instead of allocating.
///
/// # Examples
///
/// ```rust
/// use gather::ordering::range;
///
/// assert_eq!(range(Some(5.0), None, None), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(range(Some(0.0), Some(30.0), Some(10.0)), vec![0.0, 10.0, 20.0]);
/// assert_eq!(range(Some(12.0), Some(7.0), Some(-2.0)), vec![12.0, 10.0, 8.0]);
/// assert!(range(None, None, None).is_empty());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn range(start_or_stop: Option<f64>, stop: Option<f64>, step: Option<f64>) -> Vec<f64> {
    let (mut start, stop) = match stop {
        Some(stop) => (start_or_stop.unwrap_or(0.0), stop),
        None => (0.0, start_or_stop.unwrap_or(0.0)),
    };
    let step = step.filter(|step| *step != 0.0 && !step.is_nan()).unwrap_or(1.0);
    let length = ((stop - start) / step).ceil().max(0.0);
    if !length.is_finite() || length > MAX_LENGTH {
        return Vec::new();
    }
    let length = length as usize;
    let mut progression = Vec::with_capacity(length);
    while progression.len() < length {
        progression.push(start);
        start += step;
    }
    progression
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, None, None, vec![])]
    #[case(Some(0.0), None, None, vec![])]
    #[case(Some(4.0), None, None, vec![0.0, 1.0, 2.0, 3.0])]
    #[case(Some(5.0), Some(8.0), None, vec![5.0, 6.0, 7.0])]
    #[case(Some(8.0), Some(5.0), None, vec![])]
    #[case(Some(3.0), Some(10.0), Some(3.0), vec![3.0, 6.0, 9.0])]
    #[case(Some(3.0), Some(10.0), Some(15.0), vec![3.0])]
    #[case(Some(0.0), Some(-10.0), Some(-1.0), vec![0.0, -1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0, -8.0, -9.0])]
    #[case(Some(0.0), Some(3.0), Some(0.0), vec![0.0, 1.0, 2.0])]
    fn progressions(
        #[case] start_or_stop: Option<f64>,
        #[case] stop: Option<f64>,
        #[case] step: Option<f64>,
        #[case] expected: Vec<f64>,
    ) {
        assert_eq!(range(start_or_stop, stop, step), expected);
    }

    #[rstest]
    fn fractional_start() {
        let progression = range(Some(2.32), Some(5.78), None);
        let expected = [2.32, 3.32, 4.32, 5.32];
        assert_eq!(progression.len(), expected.len());
        for (actual, expected) in progression.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9);
        }
    }

    #[rstest]
    #[case(Some(f64::INFINITY), None, None)]
    #[case(Some(f64::NAN), None, None)]
    #[case(Some(0.0), Some(f64::INFINITY), Some(1.0))]
    #[case(Some(1e19), None, None)]
    #[case(Some(-1e17), Some(0.0), Some(1e-3))]
    #[case(Some(0.0), Some(4_294_967_296.0), None)]
    fn unbounded_length_is_empty(
        #[case] start_or_stop: Option<f64>,
        #[case] stop: Option<f64>,
        #[case] step: Option<f64>,
    ) {
        assert!(range(start_or_stop, stop, step).is_empty());
    }
}
