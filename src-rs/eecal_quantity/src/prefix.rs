//! SI prefixes for displaying and entering magnitudes

/// The prefix ladder, ordered by increasing scale
///
/// Each entry is the lower bound of its bucket.
pub const PREFIXES: [(f64, &str); 9] = [
    (1e-12, "p"),
    (1e-9, "n"),
    (1e-6, "µ"),
    (1e-3, "m"),
    (1.0, ""),
    (1e3, "k"),
    (1e6, "M"),
    (1e9, "G"),
    (1e12, "T"),
];

/// Picks the display prefix for a magnitude.
///
/// Returns the scale factor and symbol of the bucket with the greatest lower
/// bound that does not exceed `|value|`. Values below the smallest bucket
/// (including zero) use `p`, values above the largest use `T`.
///
/// The magnitude is first rounded to 12 significant digits, so a value such
/// as `9.999999999999997e-7` left over from bound arithmetic lands in the
/// `µ` bucket rather than `n`.
///
/// ```
/// use eecal_quantity::prefix::magnitude_prefix;
///
/// assert_eq!(magnitude_prefix(12e-6), (1e-6, "µ"));
/// assert_eq!(magnitude_prefix(-818e3), (1e3, "k"));
/// assert_eq!(magnitude_prefix(1.0), (1.0, ""));
/// ```
#[must_use]
pub fn magnitude_prefix(value: f64) -> (f64, &'static str) {
    let magnitude = significant_digits(value.abs());

    PREFIXES
        .iter()
        .rev()
        .find(|(bound, _)| *bound <= magnitude)
        .copied()
        .unwrap_or(PREFIXES[0])
}

/// Rounds to 12 significant digits through the scientific notation
fn significant_digits(value: f64) -> f64 {
    format!("{value:.11e}").parse().unwrap_or(value)
}

/// Looks up the scale factor of a prefix symbol as it is typed in input.
///
/// `u` is accepted as an ASCII spelling of `µ`, as is the Greek letter mu.
#[must_use]
pub const fn prefix_factor(symbol: char) -> Option<f64> {
    match symbol {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'µ' | 'μ' | 'u' => Some(1e-6),
        'm' => Some(1e-3),
        'k' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        'T' => Some(1e12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_lower_bounds_are_inclusive() {
        for (bound, symbol) in PREFIXES {
            assert_eq!(magnitude_prefix(bound), (bound, symbol));
        }
    }

    #[test]
    fn values_inside_a_bucket() {
        assert_eq!(magnitude_prefix(600e-9), (1e-9, "n"));
        assert_eq!(magnitude_prefix(200e-3), (1e-3, "m"));
        assert_eq!(magnitude_prefix(8.5e3), (1e3, "k"));
        assert_eq!(magnitude_prefix(999.0), (1.0, ""));
    }

    #[test]
    fn out_of_range_values_clamp_to_the_ends() {
        assert_eq!(magnitude_prefix(0.0), (1e-12, "p"));
        assert_eq!(magnitude_prefix(1e-15), (1e-12, "p"));
        assert_eq!(magnitude_prefix(5e15), (1e12, "T"));
    }

    #[test]
    fn float_noise_below_a_bucket_bound() {
        let half_width = (11e-6 - 9e-6) / 2.0;
        assert!(half_width < 1e-6);
        assert_eq!(magnitude_prefix(half_width), (1e-6, "µ"));
        assert_eq!(magnitude_prefix(-999.999_999_999_9e-9), (1e-6, "µ"));
        assert_eq!(magnitude_prefix(999.9e-9), (1e-9, "n"));
    }

    #[test]
    fn sign_is_ignored() {
        assert_eq!(magnitude_prefix(-12.3), (1.0, ""));
    }

    #[test]
    fn typed_prefixes() {
        assert_eq!(prefix_factor('k'), Some(1e3));
        assert_eq!(prefix_factor('u'), prefix_factor('µ'));
        assert_eq!(prefix_factor('V'), None);
    }
}
