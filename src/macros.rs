//! Literal constructors for `Decimal`.

#![forbid(unsafe_code)]

/// Create a `Decimal` from a string/number literal at **runtime**.
///
/// Parses with the strict decimal grammar and panics on invalid input
/// (use the `FromStr` impl for a fallible path).
///
/// ```rust
/// # use bigdec::dec;
/// let x = dec!(-12.34);
/// assert!(x.is_negative());
/// assert_eq!(x.to_string(), "-12.34");
/// ```
#[macro_export]
macro_rules! dec {
    ($lit:literal) => {{
        // Accept both string and numeric literals by stringifying the input
        // and trimming optional quotes from string literals.
        let raw = ::core::stringify!($lit);
        let s = raw
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(raw);
        <$crate::Decimal as ::core::str::FromStr>::from_str(s).expect("invalid decimal literal")
    }};
}

/// Create a `Decimal` from raw parts (sign + `u64` unscaled magnitude +
/// scale), avoiding any parsing.
///
/// ```rust
/// # use bigdec::dec_parts;
/// let fee = dec_parts!(true, 25_000, 4); // -2.5000
/// assert!(fee.is_negative());
/// assert_eq!(fee.to_string(), "-2.5000");
/// ```
#[macro_export]
macro_rules! dec_parts {
    ($negative:expr, $unscaled:expr, $scale:expr) => {{
        $crate::Decimal::from_parts($negative, $unscaled, $scale)
    }};
}
