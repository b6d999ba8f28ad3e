//! Ordered comparison helpers.
//!
//! Plain functions, so each argument is evaluated exactly once.

/// The smaller of `a` and `b`; `b` when they compare equal or are unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// The larger of `a` and `b`; `b` when they compare equal or are unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_sanity() {
        assert_eq!(min(3, 5), 3);
        assert_eq!(max(3, 5), 5);
        assert_eq!(min(-2, -7), -7);
        assert_eq!(max(-2, -7), -2);
        assert_eq!(min(2.5_f32, -0.5), -0.5);
        assert_eq!(max(2.5_f32, -0.5), 2.5);
    }

    #[test]
    fn arguments_are_evaluated_once() {
        let mut calls = 0;
        let mut next = |v: i32| {
            calls += 1;
            v
        };
        let lo = min(next(4), next(9));
        let hi = max(next(4), next(9));
        assert_eq!((lo, hi), (4, 9));
        assert_eq!(calls, 4);
    }
}
