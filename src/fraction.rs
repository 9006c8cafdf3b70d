//! Exact fractions over signed 64-bit integers.
//!
//! Every [`Fraction`] is canonical: the denominator is positive, the
//! numerator and denominator are coprime, and zero is always `0/1`.
//! Arithmetic never wraps. Any step whose result does not fit in an `i64`
//! fails with [`FractionError::Overflow`].

use std::fmt;

use crate::error::{FractionError, FractionResult};

/// An immutable, canonical fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Greatest common divisor of the magnitudes of `a` and `b`.
///
/// `gcd(0, x)` is `|x|`. `gcd(0, 0)` is undefined and fails with
/// [`FractionError::InvalidArithmetic`]. The only representable-input case
/// whose answer does not fit in an `i64` is `gcd(i64::MIN, i64::MIN)` (or
/// with a zero), which fails with [`FractionError::Overflow`].
pub fn gcd(a: i64, b: i64) -> FractionResult<i64> {
    if a == 0 && b == 0 {
        return Err(FractionError::InvalidArithmetic);
    }
    i64::try_from(gcd_magnitude(a.unsigned_abs(), b.unsigned_abs()))
        .map_err(|_| FractionError::Overflow)
}

fn gcd_magnitude(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Build the canonical form of `numerator / denominator`.
///
/// Fails with [`FractionError::ZeroDenominator`] when `denominator` is 0.
pub fn canonicalize(numerator: i64, denominator: i64) -> FractionResult<Fraction> {
    if denominator == 0 {
        return Err(FractionError::ZeroDenominator);
    }

    // Reduce in 128 bits so i64::MIN operands can be sign-flipped after reduction.
    let g = i128::from(gcd_magnitude(
        numerator.unsigned_abs(),
        denominator.unsigned_abs(),
    ));
    let mut num = i128::from(numerator) / g;
    let mut den = i128::from(denominator) / g;
    if den < 0 {
        num = -num;
        den = -den;
    }

    Ok(Fraction {
        numerator: i64::try_from(num).map_err(|_| FractionError::Overflow)?,
        denominator: i64::try_from(den).map_err(|_| FractionError::Overflow)?,
    })
}

fn checked(value: Option<i64>) -> FractionResult<i64> {
    value.ok_or(FractionError::Overflow)
}

impl Fraction {
    /// Create a canonical fraction from a raw numerator/denominator pair.
    pub fn new(numerator: i64, denominator: i64) -> FractionResult<Self> {
        canonicalize(numerator, denominator)
    }

    /// The fraction `n/1`.
    pub fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Signed numerator; carries the sign of the fraction.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// True for the canonical zero `0/1`.
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// `self + other` over the least common denominator.
    pub fn add(self, other: Fraction) -> FractionResult<Fraction> {
        let (a, b, den) = self.scaled_to_common(other)?;
        canonicalize(checked(a.checked_add(b))?, den)
    }

    /// `self - other` over the least common denominator.
    pub fn subtract(self, other: Fraction) -> FractionResult<Fraction> {
        let (a, b, den) = self.scaled_to_common(other)?;
        canonicalize(checked(a.checked_sub(b))?, den)
    }

    /// `self * other`.
    ///
    /// Cross factors are cancelled before multiplying, so the product only
    /// overflows when its canonical form does not fit in 64 bits.
    pub fn multiply(self, other: Fraction) -> FractionResult<Fraction> {
        let (an, bd) = cancel(self.numerator, other.denominator);
        let (bn, ad) = cancel(other.numerator, self.denominator);
        canonicalize(
            checked(an.checked_mul(bn))?,
            checked(ad.checked_mul(bd))?,
        )
    }

    /// `self / other`. Fails with [`FractionError::DivisionByZero`] when
    /// `other` is zero.
    pub fn divide(self, other: Fraction) -> FractionResult<Fraction> {
        if other.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        let (an, bn) = cancel(self.numerator, other.numerator);
        let (bd, ad) = cancel(other.denominator, self.denominator);
        canonicalize(
            checked(an.checked_mul(bd))?,
            checked(ad.checked_mul(bn))?,
        )
    }

    /// Render as a decimal truncated toward zero with exactly `digits`
    /// fractional digits (`digits` in `0..=15`).
    pub fn to_decimal_string(&self, digits: u32) -> FractionResult<String> {
        if digits > 15 {
            return Err(FractionError::InvalidDecimalLength(i64::from(digits)));
        }
        let num = i128::from(self.numerator);
        let den = i128::from(self.denominator);
        let whole = (num / den).unsigned_abs();
        let sign = if num < 0 { "-" } else { "" };
        if digits == 0 {
            return Ok(format!("{sign}{whole}"));
        }
        let frac = (num % den).abs() * 10i128.pow(digits) / den;
        Ok(format!(
            "{sign}{whole}.{frac:0width$}",
            width = digits as usize
        ))
    }

    /// Scale both numerators to `lcm(den_a, den_b)`.
    fn scaled_to_common(self, other: Fraction) -> FractionResult<(i64, i64, i64)> {
        let g = gcd(self.denominator, other.denominator)?;
        let lcm = checked((self.denominator / g).checked_mul(other.denominator))?;
        let a = checked(self.numerator.checked_mul(lcm / self.denominator))?;
        let b = checked(other.numerator.checked_mul(lcm / other.denominator))?;
        Ok((a, b, lcm))
    }
}

/// Divide `x` and `y` by their common factor. Zero operands pass through.
fn cancel(x: i64, y: i64) -> (i64, i64) {
    if x == 0 || y == 0 {
        return (x, y);
    }
    let g = i128::from(gcd_magnitude(x.unsigned_abs(), y.unsigned_abs()));
    // A quotient is never larger in magnitude than its operand, and g == 1
    // leaves i64::MIN untouched, so both casts are lossless.
    ((i128::from(x) / g) as i64, (i128::from(y) / g) as i64)
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    fn parts(f: Fraction) -> (i64, i64) {
        (f.numerator(), f.denominator())
    }

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(12, 18), Ok(6));
        assert_eq!(gcd(-12, 18), Ok(6));
        assert_eq!(gcd(0, 7), Ok(7));
        assert_eq!(gcd(7, 0), Ok(7));
        assert_eq!(gcd(17, 5), Ok(1));
    }

    #[test]
    fn test_gcd_zero_zero_is_error() {
        assert_eq!(gcd(0, 0), Err(FractionError::InvalidArithmetic));
    }

    #[test]
    fn test_gcd_min_magnitude() {
        assert_eq!(gcd(i64::MIN, 6), Ok(2));
        assert_eq!(gcd(i64::MIN, 0), Err(FractionError::Overflow));
    }

    #[test]
    fn test_canonicalize_moves_sign_to_numerator() {
        assert_eq!(parts(frac(3, -6)), (-1, 2));
        assert_eq!(parts(frac(-3, -6)), (1, 2));
    }

    #[test]
    fn test_canonicalize_zero() {
        assert_eq!(parts(frac(0, 5)), (0, 1));
        assert_eq!(parts(frac(0, -5)), (0, 1));
    }

    #[test]
    fn test_canonicalize_zero_denominator() {
        assert_eq!(canonicalize(1, 0), Err(FractionError::ZeroDenominator));
        assert_eq!(canonicalize(0, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn test_canonicalize_min_denominator() {
        assert_eq!(parts(frac(2, i64::MIN)), (-1, 1 << 62));
        assert_eq!(canonicalize(1, i64::MIN), Err(FractionError::Overflow));
        assert_eq!(parts(frac(i64::MIN, i64::MIN)), (1, 1));
    }

    #[test]
    fn test_canonicalize_idempotent_and_coprime() {
        for n in -30..=30 {
            for d in (-12..=12).filter(|d| *d != 0) {
                let f = frac(n, d);
                assert_eq!(canonicalize(f.numerator(), f.denominator()), Ok(f));
                assert!(f.denominator() > 0);
                assert_eq!(gcd(f.numerator(), f.denominator()), Ok(1));
            }
        }
    }

    #[test]
    fn test_add() {
        assert_eq!(parts(frac(1, 2).add(frac(1, 3)).unwrap()), (5, 6));
        assert_eq!(parts(frac(1, 6).add(frac(1, 3)).unwrap()), (1, 2));
        assert_eq!(parts(frac(-1, 4).add(frac(1, 4)).unwrap()), (0, 1));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(parts(frac(1, 2).subtract(frac(1, 2)).unwrap()), (0, 1));
        assert_eq!(parts(frac(1, 3).subtract(frac(1, 2)).unwrap()), (-1, 6));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(parts(frac(2, 3).multiply(frac(3, 4)).unwrap()), (1, 2));
        assert_eq!(parts(frac(-2, 3).multiply(frac(0, 1)).unwrap()), (0, 1));
    }

    #[test]
    fn test_divide() {
        assert_eq!(parts(frac(1, 2).divide(frac(1, 3)).unwrap()), (3, 2));
        assert_eq!(parts(frac(1, 2).divide(frac(-1, 4)).unwrap()), (-2, 1));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            frac(1, 2).divide(frac(0, 1)),
            Err(FractionError::DivisionByZero)
        );
    }

    #[test]
    fn test_multiply_cancels_before_overflowing() {
        let big = frac(i64::MAX, 3);
        let third = frac(3, i64::MAX);
        assert_eq!(parts(big.multiply(third).unwrap()), (1, 1));
    }

    #[test]
    fn test_divide_min_numerators() {
        let a = frac(i64::MIN, 3);
        assert_eq!(parts(a.divide(a).unwrap()), (1, 1));
        let b = Fraction::from_integer(i64::MIN);
        assert_eq!(parts(b.divide(b).unwrap()), (1, 1));
        assert_eq!(parts(b.divide(frac(i64::MIN, 2)).unwrap()), (2, 1));
        assert_eq!(parts(b.multiply(frac(1, i64::MAX)).unwrap()), (i64::MIN, i64::MAX));
    }

    #[test]
    fn test_overflow_is_reported() {
        let big = Fraction::from_integer(i64::MAX);
        assert_eq!(big.add(big), Err(FractionError::Overflow));
        assert_eq!(big.multiply(big), Err(FractionError::Overflow));
        let a = frac(1, i64::MAX);
        let b = frac(1, i64::MAX - 1);
        assert_eq!(a.add(b), Err(FractionError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(-10, 4).to_string(), "-5/2");
    }

    #[test]
    fn test_to_decimal_string() {
        assert_eq!(frac(157, 50).to_decimal_string(3).unwrap(), "3.140");
        assert_eq!(frac(-5, 2).to_decimal_string(1).unwrap(), "-2.5");
        assert_eq!(frac(-1, 4).to_decimal_string(2).unwrap(), "-0.25");
        assert_eq!(frac(7, 1).to_decimal_string(0).unwrap(), "7");
        assert_eq!(frac(1, 3).to_decimal_string(4).unwrap(), "0.3333");
        assert_eq!(
            frac(1, 3).to_decimal_string(16),
            Err(FractionError::InvalidDecimalLength(16))
        );
    }

    // ---------------------------------------------------------------------
    // Property-based tests
    // ---------------------------------------------------------------------

    /// Canonical form of `num/den` computed in 128 bits.
    fn reference(num: i128, den: i128) -> (i128, i128) {
        let (mut a, mut b) = (num.unsigned_abs(), den.unsigned_abs());
        while b != 0 {
            (a, b) = (b, a % b);
        }
        let g = a as i128;
        let (num, den) = (num / g, den / g);
        if den < 0 { (-num, -den) } else { (num, den) }
    }

    fn wide(f: Fraction) -> (i128, i128) {
        (i128::from(f.numerator()), i128::from(f.denominator()))
    }

    fn nonzero() -> impl Strategy<Value = i64> {
        prop_oneof![any::<i64>(), -1000i64..1000].prop_filter("nonzero", |d| *d != 0)
    }

    fn numerator() -> impl Strategy<Value = i64> {
        prop_oneof![any::<i64>(), -1000i64..1000]
    }

    proptest! {
        #[test]
        fn prop_canonicalize_idempotent(n in numerator(), d in nonzero()) {
            match canonicalize(n, d) {
                Ok(f) => {
                    prop_assert_eq!(canonicalize(f.numerator(), f.denominator()), Ok(f));
                    prop_assert!(f.denominator() > 0);
                    prop_assert_eq!(gcd(f.numerator(), f.denominator()), Ok(1));
                    prop_assert_eq!(wide(f), reference(i128::from(n), i128::from(d)));
                }
                Err(e) => {
                    prop_assert_eq!(e, FractionError::Overflow);
                }
            }
        }

        #[test]
        fn prop_add_is_exact(
            n1 in numerator(), d1 in nonzero(),
            n2 in numerator(), d2 in nonzero(),
        ) {
            let (Ok(a), Ok(b)) = (canonicalize(n1, d1), canonicalize(n2, d2)) else {
                return Ok(());
            };
            let (an, ad) = wide(a);
            let (bn, bd) = wide(b);
            match a.add(b) {
                Ok(sum) => {
                    prop_assert_eq!(wide(sum), reference(an * bd + bn * ad, ad * bd));
                }
                // The common denominator may overflow before reduction.
                Err(e) => {
                    prop_assert_eq!(e, FractionError::Overflow);
                }
            }
        }

        #[test]
        fn prop_multiply_is_exact(
            n1 in numerator(), d1 in nonzero(),
            n2 in numerator(), d2 in nonzero(),
        ) {
            let (Ok(a), Ok(b)) = (canonicalize(n1, d1), canonicalize(n2, d2)) else {
                return Ok(());
            };
            let (an, ad) = wide(a);
            let (bn, bd) = wide(b);
            let expected = reference(an * bn, ad * bd);
            let fits = i64::try_from(expected.0).is_ok() && i64::try_from(expected.1).is_ok();
            match a.multiply(b) {
                Ok(product) => {
                    prop_assert_eq!(wide(product), expected);
                }
                Err(e) => {
                    prop_assert_eq!(e, FractionError::Overflow);
                    prop_assert!(!fits, "spurious overflow for {} * {}", a, b);
                }
            }
        }
    }
}
