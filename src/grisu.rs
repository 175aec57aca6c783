use std::fmt;
use std::io::{self, Write};

use tracing::trace;

use crate::decoder::decode;
use crate::digits::{generate_digits, Parts};
use crate::estimator::estimate_scaling_factor;
use crate::fp::Fp;

/// The number of significant decimal digits the digit generator can produce.
pub const MAX_SIG_DIGITS: usize = 21;

/// An upper bound for the formatted output length: 21 digits, `e`, a sign
/// and a 3-digit decimal exponent.
pub const MAX_EXP_STR_LEN: usize = MAX_SIG_DIGITS + 5;

/// Inputs the digit pipeline cannot represent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// NaN or infinity.
    NotFinite,
    /// Zero, negative zero or a negative number; the pipeline works on
    /// positive magnitudes only.
    NotPositive,
    /// The scaling power of ten `10^k` fell outside the finite normal
    /// double range, so the value cannot be brought into the digit
    /// extraction range. Reachable for magnitudes below roughly `2^-961`.
    Unscalable { k: i16 },
    /// The caller-supplied buffer cannot hold the formatted output.
    BufferTooSmall,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NotFinite => write!(f, "not a finite number"),
            Error::NotPositive => write!(f, "only positive values have digits to extract"),
            Error::Unscalable { k } => {
                write!(f, "10^{k} cannot scale the value into the digit range")
            }
            Error::BufferTooSmall => write!(f, "output buffer too small"),
        }
    }
}

impl std::error::Error for Error {}

// the shared pipeline: decompose, estimate, scale, extract.
fn scale_to_digits(v: f64) -> Result<(Parts, i16), Error> {
    if !v.is_finite() {
        return Err(Error::NotFinite);
    }
    if v <= 0.0 {
        return Err(Error::NotPositive);
    }

    let fp = decode(v);
    let k = estimate_scaling_factor(fp.e + Fp::PRECISION);
    // the power of ten is approximated through ordinary real
    // exponentiation rather than a precomputed table, so it carries
    // an input-dependent rounding error of its own
    let pow10 = 10f64.powf(k as f64);
    if !pow10.is_normal() {
        return Err(Error::Unscalable { k });
    }
    let scaled = fp.mul(decode(pow10));
    trace!(f = scaled.f, e = scaled.e as i64, k = k as i64, "scaled into the digit range");
    if !(0..24).contains(&scaled.e) {
        // the estimate left more residual bits than the divisor can absorb
        return Err(Error::Unscalable { k });
    }
    Ok((generate_digits(scaled), k))
}

/// Converts a positive finite double into its approximate decimal form
/// `<digits>e<exponent>`, 17 to 21 significant digits with the middle and
/// bottom groups zero-padded to 7 digits each.
///
/// The result is an approximation within the 21-digit budget; no
/// shortest-representation or round-trip guarantee is made.
pub fn to_exp_string(v: f64) -> Result<String, Error> {
    let (parts, k) = scale_to_digits(v)?;
    Ok(format!("{}{:07}{:07}e{}", parts.top, parts.middle, parts.bottom, -(k as i32)))
}

/// Writes the same representation as [`to_exp_string`] into a caller
/// buffer, returning the number of bytes written. `MAX_EXP_STR_LEN` bytes
/// are always enough.
pub fn format_exp(v: f64, buf: &mut [u8]) -> Result<usize, Error> {
    let (parts, k) = scale_to_digits(v)?;
    let mut cur = io::Cursor::new(buf);
    write!(cur, "{}{:07}{:07}e{}", parts.top, parts.middle, parts.bottom, -(k as i32))
        .map_err(|_| Error::BufferTooSmall)?;
    Ok(cur.position() as usize)
}

#[cfg(test)] #[test]
fn test_reference_value() {
    // the demo input of the original implementation
    assert_eq!(to_exp_string(1000000001.01010101015252).unwrap(), "10000000010101009607e-10");
}

#[cfg(test)] #[test]
fn test_small_integers_and_fractions() {
    // powers of ten scale to exactly 10^19 here, so the digit groups are
    // clean and the rounding error sits entirely in the padding zeroes
    assert_eq!(to_exp_string(1.0).unwrap(), "10000000000000000000e-19");
    assert_eq!(to_exp_string(100.0).unwrap(), "10000000000000000000e-17");
    assert_eq!(to_exp_string(0.5).unwrap(), "5000000000000000000e-19");
    // 0.1 is not a binary fraction; the trailing 555 is the quantization
    assert_eq!(to_exp_string(0.1).unwrap(), "10000000000000000555e-20");
    assert_eq!(to_exp_string(1234.5678).unwrap(), "12345678000000000338e-16");
    assert_eq!(to_exp_string(3.141592653589793).unwrap(), "31415926535897931160e-19");
}

#[cfg(test)] #[test]
fn test_large_magnitudes() {
    assert_eq!(to_exp_string(1e300).unwrap(), "10000000000000000710e281");
    assert_eq!(to_exp_string(f64::MAX).unwrap(), "17976931348623157300e289");
}

#[cfg(test)] #[test]
fn test_rejects_unsupported_inputs() {
    assert_eq!(to_exp_string(f64::NAN), Err(Error::NotFinite));
    assert_eq!(to_exp_string(f64::INFINITY), Err(Error::NotFinite));
    assert_eq!(to_exp_string(f64::NEG_INFINITY), Err(Error::NotFinite));
    assert_eq!(to_exp_string(0.0), Err(Error::NotPositive));
    assert_eq!(to_exp_string(-0.0), Err(Error::NotPositive));
    assert_eq!(to_exp_string(-1.5), Err(Error::NotPositive));
    // too small: 10^k overflows before the value can be scaled up
    assert_eq!(to_exp_string(1e-300), Err(Error::Unscalable { k: 319 }));
    assert_eq!(to_exp_string(5e-324), Err(Error::Unscalable { k: 327 }));
}

#[cfg(test)] #[test]
fn test_format_exp_buffer() {
    let mut buf = [0; MAX_EXP_STR_LEN];
    let len = format_exp(100.0, &mut buf).unwrap();
    assert_eq!(&buf[..len], b"10000000000000000000e-17");

    let mut small = [0; 8];
    assert_eq!(format_exp(100.0, &mut small), Err(Error::BufferTooSmall));
}

#[cfg(test)] #[test]
fn test_full_exponent_range() {
    // sweep both mantissa extremes of every exponent field: everything from
    // 2^-961 up formats, everything below reports the power of ten it could
    // not raise, and the digit generator precondition never trips
    for raw_exp in 0u64..=2046 {
        for sig in [u64::from(raw_exp == 0), 0x000f_ffff_ffff_ffff] {
            let v = f64::from_bits((raw_exp << 52) | sig);
            match to_exp_string(v) {
                Ok(s) => {
                    assert!(raw_exp >= 62, "unexpected success for {v:e}: {s}");
                    assert!(s.len() >= MAX_SIG_DIGITS - 2 && s.contains('e'), "malformed: {s}");
                }
                Err(Error::Unscalable { k }) => {
                    assert!(raw_exp < 62, "unexpected failure for {v:e}");
                    assert!(k > 308, "k = {k} should have been representable");
                }
                Err(e) => panic!("unexpected error for {v:e}: {e}"),
            }
        }
    }
}
