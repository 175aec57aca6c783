use crate::fp::Fp;

pub const TEN_POW_7: u64 = 10_000_000;

/// Up to 21 significant decimal digits, split into base-10^7 groups to keep
/// every accumulator within 32 bits.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Parts {
    /// The leading group, up to 7 digits, printed without padding.
    pub top: u32,
    /// The middle 7 digits.
    pub middle: u32,
    /// The bottom 7 digits.
    pub bottom: u32,
}

/// Splits a scaled fixed-point number into its decimal digit groups.
///
/// The exponent is a small residual left shift (the multiplier does not
/// re-normalize). Shifting the mantissa first would zero out the low bits
/// before the modulo, so the shift is folded into the divisor instead:
///
/// ```text
/// bottom = (f mod (10^7 >> e)) << e
/// middle = (f  /  (10^7 >> e)) mod 10^7
/// top    = (f  /  (10^7 >> e))  /  10^7
/// ```
///
/// The caller must have scaled the value so that `0 <= e < 24` holds (the
/// divisor stays positive); the orchestrator guarantees it.
pub fn generate_digits(fp: Fp) -> Parts {
    debug_assert!((0..24).contains(&fp.e));
    let divisor = TEN_POW_7 >> fp.e;
    Parts {
        bottom: ((fp.f % divisor) << fp.e) as u32,
        middle: ((fp.f / divisor) % TEN_POW_7) as u32,
        top: ((fp.f / divisor) / TEN_POW_7) as u32,
    }
}

#[cfg(test)] #[test]
fn test_generate_digits_unshifted() {
    // with e = 0 the groups are the plain base-10^7 decomposition
    let parts = generate_digits(Fp { f: 123456789012345, e: 0 });
    assert_eq!(parts, Parts { top: 1, middle: 2345678, bottom: 9012345 });
}

#[cfg(test)] #[test]
fn test_generate_digits_shifted() {
    // 5 * 10^18 carrying one residual exponent bit: 10^19 in total
    let parts = generate_digits(Fp { f: 5_000_000_000_000_000_000, e: 1 });
    assert_eq!(parts, Parts { top: 100000, middle: 0, bottom: 0 });

    let parts = generate_digits(Fp { f: 9876543210987654321, e: 2 });
    assert_eq!(parts, Parts { top: 395061, middle: 7284395, bottom: 617284 });

    let parts = generate_digits(Fp { f: 12345678901234567890, e: 3 });
    assert_eq!(parts, Parts { top: 987654, middle: 3120987, bottom: 6543120 });
}

#[cfg(test)] #[test]
fn test_generate_digits_recombines() {
    // top * 10^14 + middle * 10^7 + bottom is exactly the shifted mantissa:
    // the final left shift restores the residual bits the divisor absorbed
    for &(f, e) in &[(123456789012345u64, 0i16), (5_000_000_000_000_000_000, 1),
                     (9876543210987654321, 2), (12345678901234567890, 3)] {
        let parts = generate_digits(Fp { f, e });
        let whole = parts.top as u128 * (TEN_POW_7 * TEN_POW_7) as u128
            + parts.middle as u128 * TEN_POW_7 as u128
            + parts.bottom as u128;
        assert_eq!(whole, (f as u128) << e, "f = {f}, e = {e}");
    }
}
