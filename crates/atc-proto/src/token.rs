//! Token-shape recognisers.
//!
//! Every recognizer matches a whole token or nothing: a token like `"1mins"`
//! is not a leg length just because it starts with one.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1},
    combinator::{opt, recognize, value},
    sequence::{pair, preceded},
    IResult,
};

use crate::command::{TurnDirection, Value};

/// Words accepted as the second argument of an altitude command.
pub const EXPEDITE_SYNONYMS: &[&str] = &["expedite", "x"];

/// Unit of a holding-pattern leg length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegUnit {
    /// `min` suffix.
    Minutes,
    /// `nm` suffix.
    NauticalMiles,
}

/// Run `parser` and accept only if it consumed the entire token.
fn whole<'a, O>(
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    token: &'a str,
) -> Option<O> {
    match parser(token) {
        Ok(("", out)) => Some(out),
        _ => None,
    }
}

fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('.'), digit1))))(input)
}

fn direction(input: &str) -> IResult<&str, TurnDirection> {
    alt((
        value(TurnDirection::Left, tag("left")),
        value(TurnDirection::Right, tag("right")),
        value(TurnDirection::Left, tag("l")),
        value(TurnDirection::Right, tag("r")),
    ))(input)
}

fn leg_length(input: &str) -> IResult<&str, (&str, LegUnit)> {
    pair(
        decimal,
        alt((
            value(LegUnit::Minutes, tag("min")),
            value(LegUnit::NauticalMiles, tag("nm")),
        )),
    )(input)
}

fn three_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_digit())(input)
}

fn radial(input: &str) -> IResult<&str, &str> {
    preceded(opt(char('r')), three_digits)(input)
}

fn octal_quad(input: &str) -> IResult<&str, &str> {
    take_while_m_n(4, 4, |c: char| ('0'..='7').contains(&c))(input)
}

/// Unsigned integer made only of ASCII digits.
pub fn integer(token: &str) -> Option<i64> {
    whole(digit1, token).and_then(|digits| digits.parse().ok())
}

/// Unsigned decimal number (`80`, `2.5`). Overflowing tokens are rejected.
pub fn number(token: &str) -> Option<f64> {
    whole(decimal, token)
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Numeric token as a typed value: integers stay integers.
///
/// A digit-only token that does not fit an `i64` is rejected rather than
/// widened to a float.
pub fn numeric_value(token: &str) -> Option<Value> {
    if is_digits(token) {
        return integer(token).map(Value::Int);
    }
    number(token).map(Value::Float)
}

/// Whether the token consists only of ASCII digits.
pub fn is_digits(token: &str) -> bool {
    whole(digit1, token).is_some()
}

/// `left`, `l`, `right` or `r`.
pub fn turn_direction(token: &str) -> Option<TurnDirection> {
    whole(direction, token)
}

/// `1min`, `1.5min`, `4nm`.
pub fn leg(token: &str) -> Option<(f64, LegUnit)> {
    whole(leg_length, token).and_then(|(n, unit)| n.parse().ok().map(|n| (n, unit)))
}

/// A hold course/radial (`270`, `r270`), as a heading in degrees.
///
/// `000` and `360` both denote north and are returned as 360.
pub fn hold_radial(token: &str) -> Option<i64> {
    let degrees: i64 = whole(radial, token)?.parse().ok()?;
    match degrees {
        0 | 360 => Some(360),
        1..=359 => Some(degrees),
        _ => None,
    }
}

/// Whether the token has the `[r]ddd` shape of a hold radial, in range or not.
pub fn is_radial_shaped(token: &str) -> bool {
    whole(radial, token).is_some()
}

/// Four-digit transponder code using only the digits 0-7.
pub fn is_squawk(token: &str) -> bool {
    whole(octal_quad, token).is_some()
}

/// Whether the token requests an expedited climb or descent.
pub fn is_expedite(token: &str) -> bool {
    EXPEDITE_SYNONYMS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(integer("080"), Some(80));
        assert_eq!(integer("8.5"), None);
        assert_eq!(number("8.5"), Some(8.5));
        assert_eq!(number("80"), Some(80.0));
        assert_eq!(number("inf"), None);
        assert_eq!(number("-5"), None);
        assert_eq!(number("5."), None);
        assert_eq!(number(""), None);
        assert_eq!(numeric_value("50"), Some(Value::Int(50)));
        assert_eq!(numeric_value("0.5"), Some(Value::Float(0.5)));
    }

    #[test]
    fn test_overflowing_numbers() {
        let nines = "9".repeat(400);
        assert_eq!(number(&nines), None);
        assert_eq!(number(&format!("{}.5", nines)), None);
        assert_eq!(numeric_value(&nines), None);
        assert_eq!(numeric_value("99999999999999999999"), None);
        assert_eq!(numeric_value("9223372036854775807"), Some(Value::Int(i64::MAX)));
    }

    #[test]
    fn test_directions() {
        assert_eq!(turn_direction("l"), Some(TurnDirection::Left));
        assert_eq!(turn_direction("left"), Some(TurnDirection::Left));
        assert_eq!(turn_direction("r"), Some(TurnDirection::Right));
        assert_eq!(turn_direction("right"), Some(TurnDirection::Right));
        assert_eq!(turn_direction("lefty"), None);
        assert_eq!(turn_direction("le"), None);
        assert_eq!(turn_direction(""), None);
    }

    #[test]
    fn test_leg_length() {
        assert_eq!(leg("1min"), Some((1.0, LegUnit::Minutes)));
        assert_eq!(leg("1.5min"), Some((1.5, LegUnit::Minutes)));
        assert_eq!(leg("4nm"), Some((4.0, LegUnit::NauticalMiles)));
        assert_eq!(leg("min"), None);
        assert_eq!(leg("1mins"), None);
        assert_eq!(leg("1"), None);
    }

    #[test]
    fn test_hold_radial() {
        assert_eq!(hold_radial("270"), Some(270));
        assert_eq!(hold_radial("r090"), Some(90));
        assert_eq!(hold_radial("000"), Some(360));
        assert_eq!(hold_radial("360"), Some(360));
        assert_eq!(hold_radial("361"), None);
        assert_eq!(hold_radial("27"), None);
        assert_eq!(hold_radial("2700"), None);
        assert_eq!(hold_radial("r"), None);

        assert!(is_radial_shaped("400"));
        assert!(is_radial_shaped("r999"));
        assert!(!is_radial_shaped("dumba"));
    }

    #[test]
    fn test_squawk() {
        assert!(is_squawk("1200"));
        assert!(is_squawk("7777"));
        assert!(is_squawk("0000"));
        assert!(!is_squawk("7778"));
        assert!(!is_squawk("120"));
        assert!(!is_squawk("12000"));
        assert!(!is_squawk("12a0"));
    }

    #[test]
    fn test_expedite() {
        assert!(is_expedite("x"));
        assert!(is_expedite("expedite"));
        assert!(!is_expedite("fast"));
    }
}
