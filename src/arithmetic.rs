//! Arithmetic for `Decimal`.
//
// - `add`/`sub`/`neg`/`abs` builder methods: the receiver supplies
//   precision and rounding mode and reports accuracy; the NaN cases
//   (opposite-signed infinities) fail with `NanError`.
// - `Add`/`Sub` operators: fresh precision-0 result, panic on NaN
//   (matching the operator semantics of the checked methods' siblings).

use core::cmp::Ordering;
use core::iter::Sum;
use core::ops::{Add, Sub};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{NanError, Result};
use crate::round::Accuracy;
use crate::{digit_len, mul_pow10, Decimal};

// Scale differences beyond this bound skip exact alignment and try the
// dominated-operand short circuit instead.
const MAX_SCALE_DIFF: u64 = 10_000;

impl Decimal {
    /// Sets `self` to the rounded sum `x + y`. A receiver with precision 0
    /// adopts the larger of the operands' precisions and the result is
    /// exact; otherwise the result is rounded to the receiver's precision
    /// and mode, with the accuracy reporting the error relative to the
    /// exact sum.
    ///
    /// Adding infinities with opposite signs fails with a NaN error; the
    /// value of `self` is unspecified in that case.
    pub fn add(&mut self, x: &Decimal, y: &Decimal) -> Result<&mut Self> {
        if x.infinite && y.infinite && x.negative != y.negative {
            return Err(NanError::new("addition of infinities with opposite signs"));
        }

        self.acc = Accuracy::Exact;
        let mut dropped = None;

        if x.infinite {
            // +Inf + y = +Inf, -Inf + y = -Inf
            self.make_inf(x.negative);
        } else if y.infinite {
            self.make_inf(y.negative);
        } else if x.is_zero() {
            // 0 + y = y, including the signs of zero
            self.copy_value(y);
        } else if y.is_zero() {
            self.copy_value(x);
        } else {
            dropped = self.add_finite(x, y);
        }

        if self.prec == 0 {
            self.prec = x.prec.max(y.prec);
        } else {
            self.round();
        }
        // an operand lost to the short circuit only shows up when rounding
        // itself discarded nothing
        if let Some(acc) = dropped {
            if self.acc == Accuracy::Exact {
                self.acc = acc;
            }
        }
        Ok(self)
    }

    /// Sets `self` to the rounded difference `x - y`. Precision, rounding,
    /// and accuracy reporting are as for `add`. Subtracting infinities
    /// with equal signs fails with a NaN error.
    pub fn sub(&mut self, x: &Decimal, y: &Decimal) -> Result<&mut Self> {
        if x.infinite && y.infinite && x.negative == y.negative {
            return Err(NanError::new("subtraction of infinities with equal signs"));
        }
        let mut ny = Decimal::default();
        ny.copy_value(y);
        ny.negative = !y.negative;
        ny.prec = y.prec;
        self.add(x, &ny)
    }

    /// Sets `self` to `x` with the sign flipped (also on zero: `-0` stays
    /// representable), then rounds per the receiver. The sign is set
    /// before rounding so direction-sensitive modes see the final sign.
    pub fn neg(&mut self, x: &Decimal) -> &mut Self {
        self.copy_value(x);
        self.negative = !x.negative;
        self.acc = Accuracy::Exact;
        if self.prec == 0 {
            self.prec = x.prec;
        } else {
            self.round();
        }
        self
    }

    /// Sets `self` to `|x|`, then rounds per the receiver.
    pub fn abs(&mut self, x: &Decimal) -> &mut Self {
        self.copy_value(x);
        self.negative = false;
        self.acc = Accuracy::Exact;
        if self.prec == 0 {
            self.prec = x.prec;
        } else {
            self.round();
        }
        self
    }

    // Unrounded sum of two finite non-zero operands. Returns the accuracy
    // owed for an operand swallowed by the short circuit, if any.
    fn add_finite(&mut self, x: &Decimal, y: &Decimal) -> Option<Accuracy> {
        let sdiff = i64::from(x.scale) - i64::from(y.scale);
        if sdiff.unsigned_abs() > MAX_SCALE_DIFF {
            if let Some(acc) = self.add_dominant(x, y) {
                return Some(acc);
            }
        }

        // align scales: scale up the operand with the smaller scale
        self.scale = x.scale.max(y.scale);
        let shifted;
        let (xa, ya): (&BigUint, &BigUint) = match sdiff.cmp(&0) {
            Ordering::Less => {
                shifted = mul_pow10(&x.coeff, sdiff.unsigned_abs() as u32);
                (&shifted, &y.coeff)
            }
            Ordering::Greater => {
                shifted = mul_pow10(&y.coeff, sdiff as u32);
                (&x.coeff, &shifted)
            }
            Ordering::Equal => (&x.coeff, &y.coeff),
        };

        if x.negative == y.negative {
            self.coeff = xa + ya;
            self.negative = x.negative;
        } else {
            // subtract the smaller magnitude from the larger and take the
            // sign of the larger; exact cancellation yields +0
            match xa.cmp(ya) {
                Ordering::Greater => {
                    self.coeff = xa - ya;
                    self.negative = x.negative;
                }
                Ordering::Less => {
                    self.coeff = ya - xa;
                    self.negative = y.negative;
                }
                Ordering::Equal => {
                    self.coeff = BigUint::zero();
                    self.negative = false;
                }
            }
        }
        self.infinite = false;
        None
    }

    // The scale gap exceeded MAX_SCALE_DIFF. When the operand with the
    // larger adjusted exponent leads by more digits than the result can
    // keep, the sum collapses to that operand; the dropped operand's sign
    // tells which side of the exact sum we land on.
    fn add_dominant(&mut self, x: &Decimal, y: &Decimal) -> Option<Accuracy> {
        let (leader, rest) = if x.adjusted_exp() >= y.adjusted_exp() {
            (x, y)
        } else {
            (y, x)
        };
        let kept = i64::from(self.prec.max(digit_len(&leader.coeff))) + 2;
        if leader.adjusted_exp() - rest.adjusted_exp() <= kept {
            return None;
        }
        self.copy_value(leader);
        Some(if rest.negative {
            Accuracy::Above
        } else {
            Accuracy::Below
        })
    }
}

// --- Operator traits (panic on NaN, like the checked methods' operators) ---

impl Add for &Decimal {
    type Output = Decimal;
    #[inline]
    fn add(self, rhs: &Decimal) -> Decimal {
        let mut z = Decimal::default();
        Decimal::add(&mut z, self, rhs).expect("Decimal::add of opposite infinities");
        z
    }
}

impl Add for Decimal {
    type Output = Decimal;
    #[inline]
    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    #[inline]
    fn sub(self, rhs: &Decimal) -> Decimal {
        let mut z = Decimal::default();
        Decimal::sub(&mut z, self, rhs).expect("Decimal::sub of equal-signed infinities");
        z
    }
}

impl Sub for Decimal {
    type Output = Decimal;
    #[inline]
    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

// --- Iteration helpers ---

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Decimal::default(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Self {
        iter.fold(Decimal::default(), |acc, x| &acc + x)
    }
}
