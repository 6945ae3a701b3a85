//! Rounding for `Decimal`.
//
// - `RoundingMode`: the closed set of supported direction attributes.
// - `Accuracy`: how the stored value relates to the exact result.
// - `Decimal::round` (crate-internal): reduce the coefficient to at most
//   `prec` significant digits; the public entry point is `set_prec`.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::{digit_len, pow10, Decimal};

/// Rounding modes supported by this crate.
///
/// The dectest `half_down` attribute has no counterpart here; test drivers
/// skip sections that select it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// To nearest; ties to the even last-kept digit (bankers' rounding).
    #[default]
    ToNearestEven,
    /// To nearest; ties away from zero.
    ToNearestAway,
    /// Toward zero (truncate).
    ToZero,
    /// Away from zero if there is any discarded remainder.
    AwayFromZero,
    /// Toward -∞ (a.k.a. floor).
    ToNegativeInf,
    /// Toward +∞ (a.k.a. ceiling).
    ToPositiveInf,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundingMode::ToNearestEven => "ToNearestEven",
            RoundingMode::ToNearestAway => "ToNearestAway",
            RoundingMode::ToZero => "ToZero",
            RoundingMode::AwayFromZero => "AwayFromZero",
            RoundingMode::ToNegativeInf => "ToNegativeInf",
            RoundingMode::ToPositiveInf => "ToPositiveInf",
        })
    }
}

/// How a stored value relates numerically to the exact result of the most
/// recent operation. For negative values the direction follows numerical
/// order, not magnitude: rounding a negative magnitude up yields `Below`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Accuracy {
    /// The stored value is less than the exact result.
    Below,
    /// No information was discarded.
    #[default]
    Exact,
    /// The stored value is greater than the exact result.
    Above,
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Accuracy::Below => "Below",
            Accuracy::Exact => "Exact",
            Accuracy::Above => "Above",
        })
    }
}

impl Decimal {
    // Reduces the coefficient to at most `prec` significant digits under
    // the value's rounding mode, updating `acc` when digits are lost.
    //
    // An increment that lengthens the coefficient (999 -> 1000) loops for
    // one more pass; that pass only drops zeros, so the accuracy decided
    // here survives it. A scale that would leave the i32 range saturates
    // to infinity.
    pub(crate) fn round(&mut self) {
        if self.infinite || self.prec == 0 {
            return;
        }
        loop {
            let digits = digit_len(&self.coeff);
            if digits <= self.prec {
                return;
            }
            let extra = digits - self.prec;

            let scale = i64::from(self.scale) - i64::from(extra);
            if scale < i64::from(i32::MIN) {
                // decimal exponent overflow
                let negative = self.negative;
                self.make_inf(negative);
                self.acc = if negative {
                    Accuracy::Below
                } else {
                    Accuracy::Above
                };
                return;
            }
            self.scale = scale as i32;

            let unit = pow10(extra);
            let (kept, dropped) = self.coeff.div_rem(&unit);
            if dropped.is_zero() {
                self.coeff = kept;
                continue;
            }

            let inc = should_increment(&kept, &dropped, &unit, self.negative, self.mode);
            self.acc = if inc != self.negative {
                Accuracy::Above
            } else {
                Accuracy::Below
            };
            self.coeff = if inc { kept + 1u32 } else { kept };
        }
    }
}

// ---------- helpers ----------

// Decide whether to increment the kept prefix, given the dropped suffix
// (non-zero), its unit 10^extra, the sign, and the mode. The to-nearest
// modes compare the doubled suffix against the unit, which is equivalent
// to inspecting the leading dropped digit.
fn should_increment(
    kept: &BigUint,
    dropped: &BigUint,
    unit: &BigUint,
    is_negative: bool,
    mode: RoundingMode,
) -> bool {
    match mode {
        RoundingMode::ToZero => false,
        RoundingMode::AwayFromZero => true,
        RoundingMode::ToPositiveInf => !is_negative,
        RoundingMode::ToNegativeInf => is_negative,
        RoundingMode::ToNearestAway => (dropped << 1u32) >= *unit,
        RoundingMode::ToNearestEven => {
            let twice = dropped << 1u32;
            match twice.cmp(unit) {
                Ordering::Greater => true,
                Ordering::Less => false,
                // exactly half: increment iff the last kept digit is odd
                Ordering::Equal => kept.is_odd(),
            }
        }
    }
}
