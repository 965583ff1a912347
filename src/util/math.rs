//! Angle and rounding helpers shared by the geometry code.

/// Computes sine and cosine for an angle in degrees.
pub(crate) fn sin_cos_deg(angle_deg: f64) -> (f64, f64) {
    angle_deg.to_radians().sin_cos()
}

/// Rounds to the nearest integer, ties to even, saturating at the `i32` range.
pub(crate) fn round_i32(value: f64) -> i32 {
    let rounded = value.round_ties_even();
    if rounded.is_nan() {
        return 0;
    }
    rounded.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Rounds to the nearest integer, ties to even, or `None` outside the `i32` range.
pub(crate) fn checked_round_i32(value: f64) -> Option<i32> {
    let rounded = value.round_ties_even();
    (rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64).then_some(rounded as i32)
}

/// Floors a non-negative scaled coordinate to a pixel offset.
pub(crate) fn floor_i32(value: f64) -> i32 {
    value.floor().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Ceils a non-negative scaled length to whole pixels.
pub(crate) fn ceil_i32(value: f64) -> i32 {
    value.ceil().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::{ceil_i32, checked_round_i32, floor_i32, round_i32, sin_cos_deg};

    #[test]
    fn sin_cos_deg_matches_quadrants() {
        let (sin, cos) = sin_cos_deg(90.0);
        assert!(sin > 0.999_999);
        assert!(cos.abs() < 1e-12);

        let (sin, cos) = sin_cos_deg(0.0);
        assert_eq!(sin, 0.0);
        assert_eq!(cos, 1.0);
    }

    #[test]
    fn round_i32_breaks_ties_to_even() {
        assert_eq!(round_i32(0.5), 0);
        assert_eq!(round_i32(1.5), 2);
        assert_eq!(round_i32(-2.5), -2);
        assert_eq!(round_i32(2.4999), 2);
        assert_eq!(round_i32(f64::NAN), 0);
        assert_eq!(round_i32(1e12), i32::MAX);
    }

    #[test]
    fn checked_round_rejects_out_of_range() {
        assert_eq!(checked_round_i32(-2.5), Some(-2));
        assert_eq!(checked_round_i32(i32::MAX as f64), Some(i32::MAX));
        assert_eq!(checked_round_i32(i32::MAX as f64 + 1.0), None);
        assert_eq!(checked_round_i32(i32::MIN as f64 - 1.0), None);
        assert_eq!(checked_round_i32(f64::NAN), None);
    }

    #[test]
    fn floor_and_ceil_follow_sign() {
        assert_eq!(floor_i32(2.7), 2);
        assert_eq!(floor_i32(-0.2), -1);
        assert_eq!(ceil_i32(2.1), 3);
        assert_eq!(ceil_i32(3.0), 3);
    }
}
