//! Conversions between nanoton and whole TON amounts.
//!
//! The API reports balances and fees in nanoton (1 TON = 10^9 nanoton).

/// Nanoton per TON.
const NANO_PER_TON: f64 = 1e9;

/// Converts a nanoton value to TON.
#[must_use]
pub fn nano_to_amount(value: i64) -> f64 {
    value as f64 / NANO_PER_TON
}

/// Converts a TON value to nanoton, truncating sub-nanoton precision.
#[must_use]
pub fn amount_to_nano(value: f64) -> i64 {
    (value * NANO_PER_TON) as i64
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nano_to_amount() {
        assert_eq!(nano_to_amount(1_000_000_000), 1.0);
        assert_eq!(nano_to_amount(1_500_000_000), 1.5);
        assert_eq!(nano_to_amount(0), 0.0);
        assert_eq!(nano_to_amount(-2_000_000_000), -2.0);
    }

    #[test]
    fn test_amount_to_nano() {
        assert_eq!(amount_to_nano(1.0), 1_000_000_000);
        assert_eq!(amount_to_nano(0.5), 500_000_000);
        assert_eq!(amount_to_nano(0.0), 0);
    }

    #[test]
    fn test_round_trip() {
        for nano in [0i64, 1_000_000_000, 123_456_789_000] {
            assert_eq!(amount_to_nano(nano_to_amount(nano)), nano);
        }
    }
}
