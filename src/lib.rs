/* Grisu -- Approximate double-to-decimal conversion for Rust using
 * extended-precision binary fixed-point arithmetic.
 *
 * The authors disclaim copyright to this source code.  In place of
 * a legal notice, here is a blessing:
 *
 *    May you do good and not evil.
 *    May you find forgiveness for yourself and forgive others.
 *    May you share freely, never taking more than you give.
 *
 * This legal notice and blessing is shamelessly adopted from
 * the SQLite library.
 */

//! Converts an IEEE-754 double into a decimal string of the form
//! `<digits>e<exponent>`, substituting extended-precision binary arithmetic
//! for exact decimal arithmetic as in the Grisu family of algorithms
//! described in [1]. This is the approximating fast path alone: there is no
//! boundary tracking and no exact fallback, so the output is a plausible
//! 21-digit-budget rendering, not a guaranteed shortest round-trip one.
//!
//! [1] Florian Loitsch. 2010. Printing floating-point numbers quickly and
//!     accurately with integers. SIGPLAN Not. 45, 6 (June 2010), 233-243.

pub mod decoder;
pub mod digits;
pub mod estimator;
pub mod fp;

mod grisu;

pub use crate::decoder::decode;
pub use crate::fp::Fp;
pub use crate::grisu::{format_exp, to_exp_string, Error, MAX_EXP_STR_LEN, MAX_SIG_DIGITS};
