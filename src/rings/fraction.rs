use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

/// Exact rational number, always stored in lowest terms with a positive denominator.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFractionError {
    #[error("empty literal")]
    Empty,
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),
    #[error("too many `/` in `{0}`")]
    TooManyParts(String),
    #[error("zero denominator in `{0}`")]
    ZeroDenominator(String),
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn checked_new(num: BigInt, den: BigInt) -> Option<Self> {
        if den.is_zero() {
            return None;
        }
        Some(Fraction::new(num, den))
    }

    pub fn from_ints(num: i64, den: i64) -> Self {
        Fraction::new(BigInt::from(num), BigInt::from(den))
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn abs(&self) -> Fraction {
        Fraction {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.num.is_positive()
    }

    /// LaTeX form: integers bare, everything else as `\frac{n}{d}`.
    pub fn latex(&self) -> String {
        if self.is_integer() {
            return self.num.to_string();
        }
        format!("\\frac{{{}}}{{{}}}", self.num, self.den)
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseFractionError::Empty);
        }

        let int = |part: &str| {
            part.trim()
                .parse::<BigInt>()
                .map_err(|_| ParseFractionError::InvalidInteger(part.to_string()))
        };

        let mut parts = s.split('/');
        let num = int(parts.next().ok_or(ParseFractionError::Empty)?)?;
        let den = match parts.next() {
            Some(den) => int(den)?,
            None => BigInt::one(),
        };
        if parts.next().is_some() {
            return Err(ParseFractionError::TooManyParts(s.to_string()));
        }

        Fraction::checked_new(num, den)
            .ok_or_else(|| ParseFractionError::ZeroDenominator(s.to_string()))
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Fraction {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::new(BigInt::one(), BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::new(BigInt::zero(), BigInt::one())
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

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        let a = &self.num * &rhs.den;
        let b = &rhs.num * &self.den;
        a.cmp(&b)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fr(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_fraction_normalizes() {
        let f = Fraction::from_ints(6, -4);
        assert_eq!(f.num, BigInt::from(-3));
        assert_eq!(f.den, BigInt::from(2));

        let z = Fraction::from_ints(0, -7);
        assert_eq!(z.num, BigInt::zero());
        assert_eq!(z.den, BigInt::one());
        assert!(z.is_zero());
    }

    #[test]
    fn test_fraction_arithmetic() {
        assert_eq!(fr("1/2") + fr("1/3"), fr("5/6"));
        assert_eq!(fr("1/2") - fr("3/4"), fr("-1/4"));
        assert_eq!(fr("2/3") * fr("9/4"), fr("3/2"));
        assert_eq!(fr("2/3") / fr("-4/9"), fr("-3/2"));
        assert_eq!(-fr("5/7"), fr("-5/7"));
        assert_eq!(fr("4/8"), fr("1/2"));
        assert_eq!(fr("1/3") + fr("2/3"), 1_i64);
    }

    #[test]
    fn test_fraction_parse() {
        assert_eq!(fr("-12"), -12_i64);
        assert_eq!(fr(" 10/4 "), fr("5/2"));
        assert_eq!(
            "1/0".parse::<Fraction>().unwrap_err(),
            ParseFractionError::ZeroDenominator("1/0".into())
        );
        assert_eq!(
            "1/2/3".parse::<Fraction>().unwrap_err(),
            ParseFractionError::TooManyParts("1/2/3".into())
        );
        assert_eq!(
            "x".parse::<Fraction>().unwrap_err(),
            ParseFractionError::InvalidInteger("x".into())
        );
        assert_eq!("".parse::<Fraction>().unwrap_err(), ParseFractionError::Empty);
    }

    #[test]
    fn test_fraction_format() {
        assert_eq!(fr("7").to_string(), "7");
        assert_eq!(fr("-3/6").to_string(), "-1/2");
        assert_eq!(fr("-3/6").latex(), "\\frac{-1}{2}");
        assert_eq!(fr("-3/6").abs().latex(), "\\frac{1}{2}");
        assert_eq!(fr("12/3").latex(), "4");
    }

    #[test]
    fn test_fraction_order() {
        assert!(fr("1/3") < fr("1/2"));
        assert!(fr("-1/2") < fr("-1/3"));
        assert!(fr("1/10").is_positive());
        assert!(!fr("-1/10").is_positive());
    }
}
