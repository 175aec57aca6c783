/// An unsigned fixed-point number `f * 2^e` with 64 bits of precision.
///
/// The pair is *normalized* when the top bit of `f` is set, i.e. the full
/// 64-bit width is used. Normalization is the decoder's job; `mul` does not
/// restore it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Fp {
    /// The integer mantissa.
    pub f: u64,
    /// The exponent in base 2.
    pub e: i16,
}

impl Fp {
    /// The mantissa width in bits.
    pub const PRECISION: i16 = 64;

    /// Multiplies two fixed-point numbers.
    ///
    /// The true product of two 64-bit mantissas is 128 bits wide; the low
    /// 64 bits are discarded with a round-half-up bias, so the result is
    /// within 1 ulp of the exact product shifted right by 64. The exponent
    /// grows by 64 accordingly. The result is not necessarily normalized.
    pub fn mul(self, other: Fp) -> Fp {
        const MASK: u64 = 0xffffffff;
        // every multiplied pair is 32 bits wide, so no partial product
        // can overflow, and the carries stay within u64 as well.
        let a = self.f >> 32;
        let b = self.f & MASK;
        let c = other.f >> 32;
        let d = other.f & MASK;
        let ac = a * c;
        let bc = b * c;
        let ad = a * d;
        let bd = b * d;
        let tmp = (bd >> 32) + (ad & MASK) + (bc & MASK) + (1 << 31) /* round */;
        let f = ac + (ad >> 32) + (bc >> 32) + (tmp >> 32);
        let e = self.e + other.e + Fp::PRECISION;
        Fp { f, e }
    }
}

#[cfg(test)] #[test]
fn test_mul_simple() {
    // 0.5 * 0.5 = 0.25, i.e. 2^63 * 2^63 = 2^62 * 2^64
    let half = Fp { f: 1 << 63, e: -64 };
    assert_eq!(half.mul(half), Fp { f: 1 << 62, e: -64 });

    // the all-ones product rounds to the exact high half
    let ones = Fp { f: u64::MAX, e: -5 };
    let prod = ones.mul(Fp { f: u64::MAX, e: 3 });
    assert_eq!(prod, Fp { f: 0xfffffffffffffffe, e: 62 });
}

#[cfg(test)] #[test]
fn test_mul_against_wide_product() {
    fn prop(a: u64, b: u64) -> bool {
        // force both operands normalized, as the pipeline guarantees
        let a = a | (1 << 63);
        let b = b | (1 << 63);
        let exact = ((a as u128 * b as u128) >> 64) as u64;
        let got = Fp { f: a, e: -10 }.mul(Fp { f: b, e: 7 });
        // round-half-up never undershoots the truncated product
        got.e == -10 + 7 + 64 && (got.f == exact || got.f == exact.wrapping_add(1))
    }
    quickcheck::quickcheck(prop as fn(u64, u64) -> bool);
}
