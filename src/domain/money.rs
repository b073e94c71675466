use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::ParseError;

/// Renders an amount the way the console shows it: currency symbol, two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money<'a> {
    pub amount: Decimal,
    pub symbol: &'a str,
}

impl<'a> Money<'a> {
    pub const DISPLAY_DECIMALS: u32 = 2;

    pub fn new(amount: Decimal, symbol: &'a str) -> Self {
        Self { amount, symbol }
    }
}

impl core::fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // tie -> bankers (round half to even)
        let rounded = self
            .amount
            .round_dp_with_strategy(Self::DISPLAY_DECIMALS, RoundingStrategy::MidpointNearestEven);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-{}{:.2}", self.symbol, rounded.abs())
        } else {
            write!(f, "{}{:.2}", self.symbol, rounded.abs())
        }
    }
}

/// Parses a console amount. The sign is left for the account to judge.
pub fn parse_amount(input: &str) -> Result<Decimal, ParseError> {
    let s = input.trim();

    if s.is_empty() {
        return Err(ParseError::Empty { field: "amount" });
    }

    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .map_err(|_| ParseError::NotANumber {
            field: "amount",
            input: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{Money, parse_amount};
    use crate::domain::ParseError;

    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case("500", Decimal::new(500, 0))]
    #[case(" 12.75 ", Decimal::new(1275, 2))]
    #[case("-50", Decimal::new(-50, 0))]
    #[case("0", Decimal::ZERO)]
    #[case("1e3", Decimal::new(1000, 0))]
    fn parses_amounts(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12,5")]
    #[case("1.2.3")]
    fn rejects_malformed_amounts(#[case] input: &str) {
        assert_eq!(
            parse_amount(input),
            Err(ParseError::NotANumber {
                field: "amount",
                input: input.to_string(),
            })
        );
    }

    #[test]
    fn rejects_amounts_beyond_decimal_range() {
        let digits = "9".repeat(40);

        assert_eq!(
            parse_amount(&digits),
            Err(ParseError::NotANumber {
                field: "amount",
                input: digits.clone(),
            })
        );
        assert_eq!(
            parse_amount("79228162514264337593543950335").unwrap(),
            Decimal::MAX
        );
    }

    #[test]
    fn rejects_blank_amount() {
        assert_eq!(
            parse_amount("   "),
            Err(ParseError::Empty { field: "amount" })
        );
    }

    #[test]
    fn bankers_round_half_even() {
        let v = Money::new(Decimal::new(1_2345, 3), "₹"); // 12.345 -> 12.34
        assert_eq!(format!("{}", v), "₹12.34");
        let v = Money::new(Decimal::new(1_2355, 3), "₹"); // 12.355 -> 12.36
        assert_eq!(format!("{}", v), "₹12.36");
        let v = Money::new(Decimal::new(-1_2345, 3), "$");
        assert_eq!(format!("{}", v), "-$12.34");
        let v = Money::new(Decimal::new(1500, 0), "₹");
        assert_eq!(format!("{}", v), "₹1500.00");
    }
}
