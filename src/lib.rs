//! bigdec: an arbitrary-precision decimal floating-point type.
//!
//! A `Decimal` represents `sign × coefficient × 10^(-scale)` where the
//! coefficient is a non-negative `BigUint` and the sign (of finite values,
//! of zero, and of infinity) lives in a separate flag. Every value carries
//! its own working precision, rounding mode, and the accuracy of the most
//! recent operation, following the General Decimal Arithmetic
//! specification for rounding, sign handling, and string conversion.
//!
//! Modules:
//! - `arithmetic`: `add`/`sub`/`neg`/`abs` + operator impls
//! - `round`: rounding modes, accuracy, and the rounding engine
//! - `convert`: string parsing, the toSci formatter, float conversion
//! - `serde` (feature = "serde"): Serialize/Deserialize impls
//! - `macros`: `dec!` and `dec_parts!`
//! - `error`: parse & NaN error types
//!
//! The API uses mutating builder methods on the result receiver
//! (`z.add(&x, &y)`), with the receiver supplying precision and rounding
//! mode. A receiver whose precision is 0 adopts the operands' precision
//! and the result stays exact.

#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

pub use crate::error::{NanError, ParseDecimalError};
pub use crate::round::{Accuracy, RoundingMode};

/// 10^n as a `BigUint`.
pub fn pow10(n: u32) -> BigUint {
    BigUint::from(10u32).pow(n)
}

/// Returns `x * 10^n`; `x` is not modified.
pub(crate) fn mul_pow10(x: &BigUint, n: u32) -> BigUint {
    x * pow10(n)
}

/// Number of decimal digits of `x`, with 0 having one digit.
///
/// `2^(bits-1) <= x < 2^bits` and `log10(2) ~ 30103/100000` pin the count
/// to within one; a single power-of-ten comparison settles it.
pub fn digit_len(x: &BigUint) -> u32 {
    if x.is_zero() {
        return 1;
    }
    let bits = x.bits();
    let guess = ((bits - 1) * 30103 / 100000) as u32 + 1;
    if *x < pow10(guess) {
        guess
    } else {
        guess + 1
    }
}

/// An arbitrary-precision decimal: a sign bit plus a `BigUint` coefficient
/// scaled by a power of ten, with working precision, rounding mode, and
/// accuracy attached.
///
/// Invariants: the coefficient is always non-negative (the sign is
/// external, so `+0` and `-0` are distinct representations), and an
/// infinite value has a zero coefficient and zero scale.
///
/// The default value is `+0` with precision 0 ("unset; adopt from
/// operands"), mode `ToNearestEven`, and accuracy `Exact`.
#[derive(Debug, Clone, Default)]
pub struct Decimal {
    // context
    prec: u32,
    mode: RoundingMode,
    acc: Accuracy,

    // value
    coeff: BigUint,
    scale: i32,
    negative: bool,
    infinite: bool,
}

impl Decimal {
    /// Creates a `+0` with unset precision, ready to receive a result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `-Inf` if `signbit` is set, `+Inf` otherwise.
    pub fn inf(signbit: bool) -> Self {
        let mut d = Self::default();
        d.set_inf(signbit);
        d
    }

    /// Creates a finite value from raw parts: sign, unscaled magnitude,
    /// and scale. The precision adopts the magnitude's digit count.
    pub fn from_parts(negative: bool, unscaled: u64, scale: i32) -> Self {
        let coeff = BigUint::from(unscaled);
        let prec = digit_len(&coeff);
        Self {
            prec,
            coeff,
            scale,
            negative,
            ..Self::default()
        }
    }

    /// Returns the working precision in decimal digits (0 when unset).
    pub const fn prec(&self) -> u32 {
        self.prec
    }

    /// Returns the rounding mode.
    pub const fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Returns the accuracy of the most recent operation on `self`.
    pub const fn acc(&self) -> Accuracy {
        self.acc
    }

    /// Returns the scale: the number of digits right of the decimal point,
    /// possibly negative.
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns the unscaled coefficient (always non-negative).
    pub const fn unscaled(&self) -> &BigUint {
        &self.coeff
    }

    /// Returns `-1` if `self < 0` (including `-Inf`), `0` for `±0`, and
    /// `+1` otherwise.
    pub fn sign(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns `true` if `self` is negative, negative zero, or `-Inf`.
    pub const fn signbit(&self) -> bool {
        self.negative
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    /// Returns `true` if the value is `+0` or `-0`.
    pub fn is_zero(&self) -> bool {
        !self.infinite && self.coeff.is_zero()
    }

    /// Returns `true` if the value is `+Inf` or `-Inf`.
    pub const fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Returns `true` if the value is an integer. `±Inf` are not integers;
    /// trailing fractional zeros do not matter (`12.000` is an integer).
    pub fn is_integer(&self) -> bool {
        if self.infinite {
            return false;
        }
        if self.scale <= 0 || self.coeff.is_zero() {
            return true;
        }
        let scale = self.scale as u32;
        if digit_len(&self.coeff) <= scale {
            // 0 < |self| < 1
            return false;
        }
        (&self.coeff % pow10(scale)).is_zero()
    }

    /// Sets the working precision and rounds the value if its coefficient
    /// no longer fits. `set_prec(0)` marks the precision unset ("adopt
    /// from operands") and leaves the value untouched.
    pub fn set_prec(&mut self, prec: u32) -> &mut Self {
        self.prec = prec;
        self.acc = Accuracy::Exact;
        if prec != 0 {
            self.round();
        }
        self
    }

    /// Sets the rounding mode and resets the accuracy to `Exact`.
    /// `d.set_mode(d.mode())` is a cheap way to clear the accuracy.
    pub fn set_mode(&mut self, mode: RoundingMode) -> &mut Self {
        self.mode = mode;
        self.acc = Accuracy::Exact;
        self
    }

    /// Sets `self` to `-Inf` if `signbit` is set, `+Inf` otherwise.
    /// The precision is unchanged and the result is always `Exact`.
    pub fn set_inf(&mut self, signbit: bool) -> &mut Self {
        self.make_inf(signbit);
        self.acc = Accuracy::Exact;
        self
    }

    /// Sets `self` to the (possibly rounded) value of `x`. A receiver with
    /// precision 0 adopts `x`'s precision; otherwise the value is rounded
    /// to the receiver's precision and mode.
    pub fn set(&mut self, x: &Decimal) -> &mut Self {
        self.copy_value(x);
        self.acc = Accuracy::Exact;
        if self.prec == 0 {
            self.prec = x.prec;
        } else {
            self.round();
        }
        self
    }

    /// Sets `self` to the unsigned integer `x`.
    pub fn set_u64(&mut self, x: u64) -> &mut Self {
        self.load_finite(false, BigUint::from(x), 0);
        self
    }

    /// Sets `self` to the signed integer `x`.
    pub fn set_i64(&mut self, x: i64) -> &mut Self {
        self.load_finite(x < 0, BigUint::from(x.unsigned_abs()), 0);
        self
    }

    /// Sets `self` to the arbitrary-precision unsigned integer `x`.
    pub fn set_uint(&mut self, x: &BigUint) -> &mut Self {
        self.load_finite(false, x.clone(), 0);
        self
    }

    /// Sets `self` to the arbitrary-precision signed integer `x`.
    pub fn set_int(&mut self, x: &BigInt) -> &mut Self {
        self.load_finite(x.sign() == Sign::Minus, x.magnitude().clone(), 0);
        self
    }

    /// Numerical comparison:
    ///
    ///   -1 if self <  y
    ///    0 if self == y (incl. -0 == 0, -Inf == -Inf, and +Inf == +Inf)
    ///   +1 if self >  y
    pub fn cmp(&self, y: &Decimal) -> Ordering {
        use Ordering::*;

        // zeros compare equal regardless of sign or scale, and decide
        // against any non-zero by that value's sign alone
        match (self.is_zero(), y.is_zero()) {
            (true, true) => return Equal,
            (true, false) => return if y.negative { Greater } else { Less },
            (false, true) => return if self.negative { Less } else { Greater },
            (false, false) => {}
        }

        if self.negative != y.negative {
            return if y.negative { Greater } else { Less };
        }

        match (self.infinite, y.infinite) {
            (true, true) => return Equal, // same sign
            (true, false) => return if self.negative { Less } else { Greater },
            (false, true) => return if y.negative { Greater } else { Less },
            (false, false) => {}
        }

        // both finite, non-zero, same sign
        let r = self.ucmp(y);
        if self.negative {
            r.reverse()
        } else {
            r
        }
    }

    /// Total-order comparison over abstract representations: refines
    /// `cmp` so that `-0 < +0` and, among numerically equal values, the
    /// less precise representation is greater (`1 > 1.00`), inverted for
    /// negative values (`-1 < -1.00`).
    pub fn cmp_total(&self, y: &Decimal) -> Ordering {
        // compare signs first to override the zero rule in cmp
        if self.negative != y.negative {
            return if self.negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let r = self.cmp(y);
        if r != Ordering::Equal {
            return r;
        }

        let r = y.scale.cmp(&self.scale);
        if self.negative {
            r.reverse()
        } else {
            r
        }
    }

    // compares absolute values; both operands must be finite and non-zero
    fn ucmp(&self, y: &Decimal) -> Ordering {
        // compare adjusted exponents first
        let xe = self.adjusted_exp();
        let ye = y.adjusted_exp();
        if xe != ye {
            return xe.cmp(&ye);
        }

        // equal adjusted exponents bound the shift by the digit counts
        let sdiff = i64::from(self.scale) - i64::from(y.scale);
        if sdiff < 0 {
            mul_pow10(&self.coeff, sdiff.unsigned_abs() as u32).cmp(&y.coeff)
        } else if sdiff > 0 {
            self.coeff.cmp(&mul_pow10(&y.coeff, sdiff as u32))
        } else {
            self.coeff.cmp(&y.coeff)
        }
    }

    // exponent of the leading digit in scientific form:
    // digits(coeff) - 1 - scale
    pub(crate) fn adjusted_exp(&self) -> i64 {
        i64::from(digit_len(&self.coeff)) - 1 - i64::from(self.scale)
    }

    // copies x's value (not its context); canonicalizes infinities
    pub(crate) fn copy_value(&mut self, x: &Decimal) {
        self.negative = x.negative;
        self.infinite = x.infinite;
        if x.infinite {
            self.coeff = BigUint::zero();
            self.scale = 0;
        } else {
            self.coeff = x.coeff.clone();
            self.scale = x.scale;
        }
    }

    // canonical infinity; leaves prec/mode/acc alone
    pub(crate) fn make_inf(&mut self, negative: bool) {
        self.coeff = BigUint::zero();
        self.scale = 0;
        self.negative = negative;
        self.infinite = true;
    }

    // installs a finite value and applies the precision contract: an
    // unset precision adopts the digit count, otherwise the value rounds
    pub(crate) fn load_finite(&mut self, negative: bool, coeff: BigUint, scale: i32) {
        self.coeff = coeff;
        self.scale = scale;
        self.negative = negative;
        self.infinite = false;
        self.acc = Accuracy::Exact;
        if self.prec == 0 {
            self.prec = digit_len(&self.coeff);
        } else {
            self.round();
        }
    }
}

// --- Eq/ordering: numeric, so -0 == 0 and 1.0 == 1.00 ---

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// --- Unary negation: a pure sign flip, also on zero and infinity ---

impl core::ops::Neg for Decimal {
    type Output = Decimal;
    fn neg(mut self) -> Decimal {
        self.negative = !self.negative;
        self.acc = Accuracy::Exact;
        self
    }
}

impl core::ops::Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        -self.clone()
    }
}

// Public prelude for convenience.
pub mod prelude {
    pub use crate::{Accuracy, Decimal, NanError, ParseDecimalError, RoundingMode};
}

// Submodules
pub mod arithmetic;
pub mod convert;
pub mod error;
pub mod macros;
pub mod round;

#[cfg(feature = "serde")]
pub mod serde;

// Conversions from integers
impl From<u64> for Decimal {
    fn from(x: u64) -> Self {
        let mut d = Decimal::default();
        d.set_u64(x);
        d
    }
}

impl From<i64> for Decimal {
    fn from(x: i64) -> Self {
        let mut d = Decimal::default();
        d.set_i64(x);
        d
    }
}

impl From<BigUint> for Decimal {
    fn from(x: BigUint) -> Self {
        let mut d = Decimal::default();
        d.load_finite(false, x, 0);
        d
    }
}

impl From<BigInt> for Decimal {
    fn from(x: BigInt) -> Self {
        let mut d = Decimal::default();
        d.set_int(&x);
        d
    }
}
