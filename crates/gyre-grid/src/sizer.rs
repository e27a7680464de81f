//! Minimal square grid sizing.

/// Smallest side length `N` with `N * N >= message_len`, never below 1.
///
/// Computed with an exact integer square root so large lengths do not
/// suffer float rounding. Encode and decode both call this with the same
/// length, which is why the side length never needs to be stored.
///
/// # Examples
///
/// ```
/// use gyre_grid::side_length;
///
/// assert_eq!(side_length(0), 1);
/// assert_eq!(side_length(9), 3);
/// assert_eq!(side_length(10), 4);
/// ```
pub fn side_length(message_len: usize) -> usize {
    let root = message_len.isqrt();
    let side = if root * root < message_len {
        root + 1
    } else {
        root
    };
    side.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_lengths() {
        let expected = [1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4];
        for (len, want) in expected.iter().enumerate() {
            assert_eq!(side_length(len), *want, "len {len}");
        }
    }

    #[test]
    fn perfect_squares_are_exact() {
        for n in 1..200usize {
            assert_eq!(side_length(n * n), n);
            assert_eq!(side_length(n * n + 1), n + 1);
        }
    }

    #[test]
    fn huge_length_does_not_overflow() {
        let side = side_length(usize::MAX);
        assert!((side as u128) * (side as u128) >= usize::MAX as u128);
    }

    proptest! {
        #[test]
        fn side_is_minimal(len in 0usize..1_000_000) {
            let n = side_length(len);
            prop_assert!(n * n >= len);
            prop_assert!(n == 1 || (n - 1) * (n - 1) < len);
        }
    }
}
