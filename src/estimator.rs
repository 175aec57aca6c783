use crate::fp::Fp;

// 1/log2(10), i.e. log10(2); converts a binary exponent to a decimal one
const INV_LOG2_10: f64 = 0.30102999566398114;

/// Estimates the decimal exponent `k` such that scaling a normalized
/// fixed-point number by `10^k` lands its digits in the extraction range.
///
/// `exp` is the binary exponent of the value with the multiplier's 64-bit
/// growth already added in. The estimate is `ceil((-exp + 63) * log10(2))`,
/// with the ceiling computed by truncation: an exact result is returned
/// unchanged, a positive fraction rounds up, a negative fraction truncates
/// toward zero.
pub fn estimate_scaling_factor(exp: i16) -> i16 {
    let estimate = (-exp as i32 + (Fp::PRECISION - 1) as i32) as f64 * INV_LOG2_10;
    let trunc = estimate as i64;
    if trunc as f64 == estimate || estimate < 0.0 {
        trunc as i16
    } else {
        trunc as i16 + 1
    }
}

#[cfg(test)] #[test]
fn test_estimate_scaling_factor() {
    // 1.0 decodes to e = -63, so the orchestrator passes -63 + 64 = 1
    assert_eq!(estimate_scaling_factor(1), 19);
    assert_eq!(estimate_scaling_factor(2), 19);
    assert_eq!(estimate_scaling_factor(0), 19);
    assert_eq!(estimate_scaling_factor(5), 18);
    assert_eq!(estimate_scaling_factor(30), 10);
    // exact zero crossing and the truncate-toward-zero side of the ceiling
    assert_eq!(estimate_scaling_factor(64), 0);
    assert_eq!(estimate_scaling_factor(65), 0);
    assert_eq!(estimate_scaling_factor(100), -11);
    assert_eq!(estimate_scaling_factor(-100), 50);
    // extremes of the double exponent range, post-normalization
    assert_eq!(estimate_scaling_factor(-1021), 327);
    assert_eq!(estimate_scaling_factor(960 + 64), -289);
}

#[cfg(test)] #[test]
fn test_estimate_matches_true_ceiling() {
    // truncation toward zero coincides with the mathematical ceiling for
    // negative values, and the positive branch adds the missing one
    for exp in -1100i16..=1100 {
        let exact = ((-exp as i32 + 63) as f64 * INV_LOG2_10).ceil() as i16;
        assert_eq!(estimate_scaling_factor(exp), exact, "exp = {exp}");
    }
}
