#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Euclidean remainder for floats: the result is always in `[0, y)` for `y > 0`.
#[inline]
pub fn wrap_positive(x: f64, y: f64) -> f64 {
    let w = fmod(x, y);
    if w < 0.0 {
        // `w + y` can round up to `y` itself for tiny negative `w`.
        let shifted = w + y;
        if shifted >= y {
            0.0
        } else {
            shifted
        }
    } else {
        w
    }
}

/// Rounds half away from the smaller neighbour: 2.5 -> 3, -2.5 -> -2.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    libm::floor(x + 0.5)
}

/// Floor that snaps values within `epsilon` below an integer up to that integer.
#[inline]
pub fn snapped_floor(x: f64, epsilon: f64) -> f64 {
    libm::floor(x + epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_positive() {
        assert_eq!(wrap_positive(370.0, 360.0), 10.0);
        assert_eq!(wrap_positive(-10.0, 360.0), 350.0);
        assert_eq!(wrap_positive(360.0, 360.0), 0.0);
        assert_eq!(wrap_positive(-1e-18, 360.0), 0.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_snapped_floor() {
        assert_eq!(snapped_floor(24.999_999_99, 1e-6), 25.0);
        assert_eq!(snapped_floor(24.9, 1e-6), 24.0);
    }
}
