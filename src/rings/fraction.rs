use crate::error::LinalgError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;

/// Largest power of ten a decimal literal may scale by, in either direction.
pub const MAX_DECIMAL_SCALE: u64 = 100_000;

/// Exact rational number.
///
/// Always stored in lowest terms with a strictly positive denominator, so
/// the sign lives on the numerator and structural equality is value
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Result<Self, LinalgError> {
        if den.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }

        let g = num.gcd(&den);
        let num = num / &g;
        let den = den / &g;

        if den.is_negative() {
            return Ok(Self {
                num: -num,
                den: -den,
            });
        }
        Ok(Self { num, den })
    }

    pub fn from_integers(num: i64, den: i64) -> Result<Self, LinalgError> {
        Fraction::new(BigInt::from(num), BigInt::from(den))
    }

    /// Parses the exact value of a decimal literal.
    ///
    /// Accepts `[+-]digits[.digits][e[+-]digits]` as well as `[+-]n/d`,
    /// with surrounding whitespace ignored. `"0.1"` is exactly `1/10`.
    /// Literals whose decimal scale exceeds [`MAX_DECIMAL_SCALE`] are
    /// rejected as invalid.
    pub fn from_decimal_str(text: &str) -> Result<Self, LinalgError> {
        let invalid = || LinalgError::InvalidNumericLiteral(text.to_string());

        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let signed = |value: BigInt| if negative { -value } else { value };

        if let Some((num, den)) = body.split_once('/') {
            let num = parse_digits(num).ok_or_else(invalid)?;
            let den = parse_digits(den).ok_or_else(invalid)?;
            return Fraction::new(signed(num), den);
        }

        let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent = body[pos + 1..].parse::<i64>().map_err(|_| invalid())?;
                (&body[..pos], exponent)
            }
            None => (body, 0),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(invalid());
        }

        let digits = parse_digits(&format!("{}{}", int_part, frac_part)).ok_or_else(invalid)?;
        let scale = i64::try_from(frac_part.len())
            .ok()
            .and_then(|len| len.checked_sub(exponent))
            .ok_or_else(invalid)?;
        if scale.unsigned_abs() > MAX_DECIMAL_SCALE {
            return Err(invalid());
        }
        let power = num_traits::pow(BigInt::from(10), scale.unsigned_abs() as usize);

        if scale >= 0 {
            Fraction::new(signed(digits), power)
        } else {
            Fraction::new(signed(digits * power), BigInt::one())
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn add(&self, rhs: &Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::reduced(&self.num + &rhs.num, self.den.clone());
        }

        Fraction::reduced(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }

    pub fn subtract(&self, rhs: &Fraction) -> Fraction {
        self.add(&rhs.negate())
    }

    pub fn multiply(&self, rhs: &Fraction) -> Fraction {
        Fraction::reduced(&self.num * &rhs.num, &self.den * &rhs.den)
    }

    pub fn divide(&self, rhs: &Fraction) -> Result<Fraction, LinalgError> {
        if rhs.is_zero() {
            return Err(LinalgError::DivisionByZero);
        }
        Fraction::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn recip(&self) -> Option<Fraction> {
        if self.is_zero() {
            return None;
        }
        if self.num.is_negative() {
            return Some(Fraction {
                num: -&self.den,
                den: -&self.num,
            });
        }
        Some(Fraction {
            num: self.den.clone(),
            den: self.num.clone(),
        })
    }

    pub fn negate(&self) -> Fraction {
        Fraction {
            num: -&self.num,
            den: self.den.clone(),
        }
    }

    // den is known to be nonzero here
    fn reduced(num: BigInt, den: BigInt) -> Fraction {
        let g = num.gcd(&den);
        Fraction {
            num: num / &g,
            den: den / &g,
        }
    }
}

fn parse_digits(s: &str) -> Option<BigInt> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(s.as_bytes(), 10)
}

/// Conversion of a real-valued input into an exact fraction.
///
/// Floats go through their shortest round-trip decimal text, never through
/// their binary value.
pub trait IntoFraction {
    fn into_fraction(self) -> Result<Fraction, LinalgError>;
}

macro_rules! impl_into_fraction_int {
    ($($t:ty),*) => {
        $(
            impl IntoFraction for $t {
                fn into_fraction(self) -> Result<Fraction, LinalgError> {
                    Ok(Fraction::from(BigInt::from(self)))
                }
            }
        )*
    };
}

impl_into_fraction_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);

macro_rules! impl_into_fraction_float {
    ($($t:ty),*) => {
        $(
            impl IntoFraction for $t {
                fn into_fraction(self) -> Result<Fraction, LinalgError> {
                    if !self.is_finite() {
                        return Err(LinalgError::InvalidNumericLiteral(self.to_string()));
                    }
                    Fraction::from_decimal_str(&self.to_string())
                }
            }
        )*
    };
}

impl_into_fraction_float!(f32, f64);

impl IntoFraction for &str {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Fraction::from_decimal_str(self)
    }
}

impl IntoFraction for String {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Fraction::from_decimal_str(&self)
    }
}

impl IntoFraction for &String {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Fraction::from_decimal_str(self)
    }
}

impl IntoFraction for BigInt {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Ok(Fraction::from(self))
    }
}

impl IntoFraction for Fraction {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Ok(self)
    }
}

impl IntoFraction for &Fraction {
    fn into_fraction(self) -> Result<Fraction, LinalgError> {
        Ok(self.clone())
    }
}

impl From<BigInt> for Fraction {
    fn from(num: BigInt) -> Fraction {
        Fraction {
            num,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(num: i64) -> Fraction {
        Fraction::from(BigInt::from(num))
    }
}

impl std::str::FromStr for Fraction {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, LinalgError> {
        Fraction::from_decimal_str(s)
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::add(&self, &rhs)
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::subtract(&self, &rhs)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::multiply(&self, &rhs)
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        self.negate()
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
