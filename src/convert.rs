//! String and float conversion for `Decimal`.
//
// - `set_str` / `FromStr`: strict parser for `[sign] (inf | mantissa [exp])`.
// - `Display`: the canonical toSci rendering (plain form for exponents
//   in [-6, 0] territory, scientific form otherwise).
// - `set_f64` / `TryFrom<f64>`: exact binary-to-decimal conversion.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{NanError, ParseDecimalError};
use crate::round::Accuracy;
use crate::{digit_len, Decimal};

// Exponent accumulation stops here; anything this large is already far
// outside the i32 scale range and only the sign still matters.
const EXP_SATURATED: i64 = 1 << 40;

impl Decimal {
    /// Sets `self` from the decimal string `s`, keeping the receiver's
    /// precision and rounding mode: a non-zero precision rounds the parsed
    /// value, a zero precision adopts the significant digit count.
    ///
    /// The accepted syntax is
    ///
    /// ```text
    /// number   = [sign] (infinity | mantissa [exponent])
    /// sign     = "+" | "-"
    /// infinity = "inf" | "Inf"          (ASCII case-insensitive)
    /// mantissa = digits | digits "." | digits "." digits | "." digits
    /// exponent = ("e" | "E") [sign] digits
    /// ```
    ///
    /// A decoded exponent outside the i32 scale range saturates: too large
    /// gives a signed infinity, too small a signed zero, in both cases with
    /// the accuracy pointing at the lost magnitude. On error the receiver
    /// is untouched.
    pub fn set_str(&mut self, s: &str) -> core::result::Result<&mut Self, ParseDecimalError> {
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'+') => (false, &s[1..]),
            Some(b'-') => (true, &s[1..]),
            Some(_) => (false, s),
            None => return Err(ParseDecimalError::Empty),
        };
        if rest.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        if rest.eq_ignore_ascii_case("inf") {
            self.set_inf(negative);
            return Ok(self);
        }

        let (mantissa, exponent) = split_exponent(rest)?;
        let (digits, frac_len) = scan_mantissa(mantissa)?;
        let coeff = BigUint::parse_bytes(&digits, 10).ok_or(ParseDecimalError::Syntax)?;

        let scale = frac_len - exponent;
        self.negative = negative;
        self.infinite = false;
        self.acc = Accuracy::Exact;
        if scale < i64::from(i32::MIN) {
            if coeff.is_zero() {
                // an exact zero saturates the scale but loses nothing
                self.coeff = coeff;
                self.scale = i32::MIN;
            } else {
                self.make_inf(negative);
                self.acc = if negative {
                    Accuracy::Below
                } else {
                    Accuracy::Above
                };
                return Ok(self);
            }
        } else if scale > i64::from(i32::MAX) {
            if !coeff.is_zero() {
                self.acc = if negative {
                    Accuracy::Above
                } else {
                    Accuracy::Below
                };
            }
            self.coeff = BigUint::zero();
            self.scale = i32::MAX;
        } else {
            self.coeff = coeff;
            self.scale = scale as i32;
        }

        if self.prec == 0 {
            self.prec = digit_len(&self.coeff);
        } else {
            self.round();
        }
        Ok(self)
    }

    /// Sets `self` to the exact decimal value of `x`. Every finite binary
    /// float has one: with `x = m × 2^e` and `e < 0`,
    /// `x = (m × 5^-e) × 10^e`. `±0.0` keeps its sign; NaN is an error.
    pub fn set_f64(&mut self, x: f64) -> core::result::Result<&mut Self, NanError> {
        if x.is_nan() {
            return Err(NanError::new("conversion from NaN"));
        }
        if x.is_infinite() {
            self.set_inf(x.is_sign_negative());
            return Ok(self);
        }
        if x == 0.0 {
            self.load_finite(x.is_sign_negative(), BigUint::zero(), 0);
            return Ok(self);
        }

        let bits = x.to_bits();
        let exp_field = ((bits >> 52) & 0x7ff) as i32;
        let mut mant = bits & ((1u64 << 52) - 1);
        let mut exp2 = if exp_field == 0 {
            // subnormal
            -1074
        } else {
            mant |= 1 << 52;
            exp_field - 1075
        };
        // reduce the mantissa to odd so 0.5 becomes 5E-1, not 5...E-53
        while mant & 1 == 0 {
            mant >>= 1;
            exp2 += 1;
        }

        let negative = x.is_sign_negative();
        if exp2 >= 0 {
            self.load_finite(negative, BigUint::from(mant) << exp2 as u32, 0);
        } else {
            let e = exp2.unsigned_abs();
            let coeff = BigUint::from(mant) * BigUint::from(5u32).pow(e);
            self.load_finite(negative, coeff, e as i32);
        }
        Ok(self)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let mut d = Decimal::default();
        d.set_str(s)?;
        Ok(d)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = NanError;

    fn try_from(x: f64) -> core::result::Result<Self, Self::Error> {
        let mut d = Decimal::default();
        d.set_f64(x)?;
        Ok(d)
    }
}

// ---------- parsing helpers ----------

// splits at the first exponent marker and decodes the exponent
fn split_exponent(s: &str) -> core::result::Result<(&str, i64), ParseDecimalError> {
    match s.bytes().position(|b| b == b'e' || b == b'E') {
        None => Ok((s, 0)),
        Some(i) => Ok((&s[..i], parse_exponent(&s[i + 1..])?)),
    }
}

fn parse_exponent(s: &str) -> core::result::Result<i64, ParseDecimalError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        Some(_) => (false, s),
        None => return Err(ParseDecimalError::Syntax),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseDecimalError::Syntax);
    }
    let mut exp: i64 = 0;
    for b in digits.bytes() {
        if exp < EXP_SATURATED {
            exp = exp * 10 + i64::from(b - b'0');
        }
    }
    Ok(if negative { -exp } else { exp })
}

// returns the coefficient digits (decimal point removed) and the count of
// fractional digits
fn scan_mantissa(s: &str) -> core::result::Result<(Vec<u8>, i64), ParseDecimalError> {
    let mut digits = Vec::with_capacity(s.len());
    let mut point = None;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'0'..=b'9' => digits.push(b),
            b'.' if point.is_none() => point = Some(i),
            _ => return Err(ParseDecimalError::Syntax),
        }
    }
    if digits.is_empty() {
        return Err(ParseDecimalError::Syntax);
    }
    let frac = match point {
        Some(i) => (s.len() - i - 1) as i64,
        None => 0,
    };
    Ok((digits, frac))
}

// ---------- formatting ----------

/// The canonical toSci rendering: plain decimal notation when the
/// exponent is at most 0 and the adjusted exponent is at least -6,
/// scientific `d.dddE±n` notation otherwise. Trailing zeros carried by
/// the scale are preserved; the default value prints as `"0"`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signbit() {
            f.write_str("-")?;
        }
        if self.is_infinite() {
            return f.write_str("Inf");
        }

        let digits = self.unscaled().to_str_radix(10);
        let dlen = digits.len() as i64;
        let scale = i64::from(self.scale());
        let adj = -scale + dlen - 1;

        if scale >= 0 && adj >= -6 {
            // plain notation
            if scale == 0 {
                f.write_str(&digits)
            } else if dlen > scale {
                let split = (dlen - scale) as usize;
                write!(f, "{}.{}", &digits[..split], &digits[split..])
            } else {
                f.write_str("0.")?;
                for _ in 0..(scale - dlen) {
                    f.write_str("0")?;
                }
                f.write_str(&digits)
            }
        } else {
            // scientific notation; the point is omitted for one digit
            if digits.len() == 1 {
                f.write_str(&digits)?;
            } else {
                write!(f, "{}.{}", &digits[..1], &digits[1..])?;
            }
            if adj >= 0 {
                write!(f, "E+{adj}")
            } else {
                write!(f, "E{adj}")
            }
        }
    }
}
