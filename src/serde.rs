//! Serde support for `Decimal`.
//!
//! Human-readable: the toSci string (e.g., "-12.34", "1.5E+10", "Inf").
//! Binary: the tuple (negative, infinite, scale, coefficient bytes LE).
//!
//! Precision, rounding mode, and accuracy are operation context, not
//! value, and are not serialized; a deserialized value adopts the
//! precision of its digits, like a fresh parse.
//!
//! Enable with crate feature `serde`.

// Note: this file is compiled as the `serde` module.
// Avoid name collisions with the external serde crate.
use ::serde as serde_crate;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;

use crate::Decimal;

use self::serde_crate::ser::SerializeTuple;
use self::serde_crate::{de, Deserialize, Deserializer, Serialize, Serializer};

// -------- Serialize --------

impl Serialize for Decimal {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        if serializer.is_human_readable() {
            // e.g. "-12.34" in canonical toSci form.
            serializer.serialize_str(&self.to_string())
        } else {
            let mut t = serializer.serialize_tuple(4)?;
            t.serialize_element(&self.signbit())?;
            t.serialize_element(&self.is_infinite())?;
            t.serialize_element(&self.scale())?;
            t.serialize_element(&self.unscaled().to_bytes_le())?;
            t.end()
        }
    }
}

// -------- Deserialize --------

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrVisitor;

        impl<'de> de::Visitor<'de> for StrVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a decimal string")
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::from_str(s).map_err(E::custom)
            }
            fn visit_borrowed_str<E>(self, s: &'de str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(s)
            }
            fn visit_string<E>(self, s: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&s)
            }
        }

        struct PartsVisitor;

        impl<'de> de::Visitor<'de> for PartsVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a (negative, infinite, scale, coefficient bytes) tuple")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let negative: bool = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let infinite: bool = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let scale: i32 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                let bytes: Vec<u8> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(3, &self))?;

                let mut d = Decimal::default();
                if infinite {
                    d.set_inf(negative);
                } else {
                    // prec is 0 here, so load_finite adopts the digit count
                    d.load_finite(negative, BigUint::from_bytes_le(&bytes), scale);
                }
                Ok(d)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(StrVisitor)
        } else {
            deserializer.deserialize_tuple(4, PartsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_roundtrip() {
        let x = Decimal::from_str("-12.34").unwrap();
        let s = serde_json::to_string(&x).unwrap();
        assert_eq!(s, "\"-12.34\"");
        let y: Decimal = serde_json::from_str(&s).unwrap();
        assert_eq!(y.cmp_total(&x), core::cmp::Ordering::Equal);
        assert_eq!(y.to_string(), "-12.34");
    }

    #[test]
    fn json_specials() {
        let inf: Decimal = serde_json::from_str("\"-Inf\"").unwrap();
        assert!(inf.is_infinite() && inf.signbit());
        assert_eq!(serde_json::to_string(&inf).unwrap(), "\"-Inf\"");
    }
}
