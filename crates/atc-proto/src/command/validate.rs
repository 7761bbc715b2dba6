//! Argument validators.
//!
//! Validators only bound argument count and token shape. Whether a fix or a
//! runway actually exists is decided by whoever executes the command.

use crate::command::parse::{self, HoldPart};
use crate::error::CommandError;
use crate::token;

/// Accepted argument counts for a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arity {
    /// No arguments.
    Zero,
    /// Exactly one argument.
    One,
    /// Exactly two arguments.
    Two,
    /// Zero or one argument.
    ZeroOrOne,
    /// One or two arguments.
    OneOrTwo,
    /// One, two or three arguments.
    OneToThree,
    /// One or three arguments, never two.
    OneOrThree,
    /// At least one argument.
    OneOrMore,
    /// Up to three arguments.
    ZeroToThree,
}

impl Arity {
    /// Every arity shape.
    pub const ALL: &'static [Arity] = &[
        Arity::Zero,
        Arity::One,
        Arity::Two,
        Arity::ZeroOrOne,
        Arity::OneOrTwo,
        Arity::OneToThree,
        Arity::OneOrThree,
        Arity::OneOrMore,
        Arity::ZeroToThree,
    ];

    /// Whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Zero => count == 0,
            Arity::One => count == 1,
            Arity::Two => count == 2,
            Arity::ZeroOrOne => count <= 1,
            Arity::OneOrTwo => matches!(count, 1 | 2),
            Arity::OneToThree => matches!(count, 1..=3),
            Arity::OneOrThree => matches!(count, 1 | 3),
            Arity::OneOrMore => count >= 1,
            Arity::ZeroToThree => count <= 3,
        }
    }

    /// Operator-facing message naming the accepted counts.
    pub fn message(self) -> &'static str {
        match self {
            Arity::Zero => "Invalid argument length. Expected exactly zero arguments",
            Arity::One => "Invalid argument length. Expected exactly one argument",
            Arity::Two => "Invalid argument length. Expected exactly two arguments",
            Arity::ZeroOrOne => "Invalid argument length. Expected zero or one argument",
            Arity::OneOrTwo => "Invalid argument length. Expected one or two arguments",
            Arity::OneToThree => "Invalid argument length. Expected one, two, or three arguments",
            Arity::OneOrThree => "Invalid argument length. Expected one or three arguments",
            Arity::OneOrMore => "Invalid argument length. Expected one or more arguments",
            Arity::ZeroToThree => "Invalid argument length. Expected zero to three arguments",
        }
    }

    /// Validate an argument count.
    pub fn check(self, count: usize) -> Result<(), CommandError> {
        if self.accepts(count) {
            Ok(())
        } else {
            Err(CommandError::Arity(self))
        }
    }
}

/// `altitude <flight level> [expedite|x]`
pub fn altitude<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::OneOrTwo.check(args.len())?;

    parse::feet(args[0].as_ref())?;

    match args.get(1) {
        Some(modifier) if !token::is_expedite(modifier.as_ref()) => {
            Err(CommandError::InvalidExpedite)
        }
        _ => Ok(()),
    }
}

/// `heading <heading>` or `heading <left|l|right|r> <heading>`
pub fn heading<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::OneOrTwo.check(args.len())?;

    let degrees = match args {
        [degrees] => degrees.as_ref(),
        [direction, degrees] => {
            if token::turn_direction(direction.as_ref()).is_none() {
                return Err(CommandError::InvalidDirection);
            }
            degrees.as_ref()
        }
        _ => return Err(CommandError::Arity(Arity::OneOrTwo)),
    };

    if !token::is_digits(degrees) {
        return Err(CommandError::HeadingNotNumber);
    }
    // The incremental-turn heuristic is only defined for 1-3 digit tokens.
    if degrees.len() > 3 {
        return Err(CommandError::HeadingTooLong);
    }
    Ok(())
}

/// `hold [fix] [direction] [leg length] [radial]`, in any order.
///
/// Each argument must fill a different slot; an argument matching no other
/// shape is the fix, so a second unrecognised word is a second fix.
pub fn hold<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::ZeroToThree.check(args.len())?;

    let mut seen: Vec<&'static str> = Vec::with_capacity(args.len());
    for arg in args {
        let slot = HoldPart::classify(arg.as_ref())?.slot();
        if seen.contains(&slot) {
            return Err(CommandError::DuplicateHoldArgument(slot));
        }
        seen.push(slot);
    }
    Ok(())
}

/// `squawk <code>` with a four-digit octal code.
pub fn squawk<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::One.check(args.len())?;
    if token::is_squawk(args[0].as_ref()) {
        Ok(())
    } else {
        Err(CommandError::InvalidSquawk)
    }
}

/// `fix <name> [name ...]`
pub fn fix<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::OneOrMore.check(args.len())
}

/// `cross <fix> <altitude>`
pub fn crossing<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::Two.check(args.len())?;
    parse::feet(args[1].as_ref()).map(|_| ())
}

/// `speed <knots>`
pub fn speed<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::One.check(args.len())?;
    if token::numeric_value(args[0].as_ref()).is_none() {
        return Err(CommandError::SpeedNotNumber);
    }
    Ok(())
}

/// `timewarp [rate]`
pub fn timewarp<S: AsRef<str>>(args: &[S]) -> Result<(), CommandError> {
    Arity::ZeroOrOne.check(args.len())?;
    match args.first() {
        Some(rate) if token::numeric_value(rate.as_ref()).is_none() => {
            Err(CommandError::TimewarpNotNumber)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(n: usize) -> Vec<&'static str> {
        vec!["x"; n]
    }

    #[test]
    fn test_arity_boundaries() {
        let expected: &[(Arity, &[usize])] = &[
            (Arity::Zero, &[0]),
            (Arity::One, &[1]),
            (Arity::Two, &[2]),
            (Arity::ZeroOrOne, &[0, 1]),
            (Arity::OneOrTwo, &[1, 2]),
            (Arity::OneToThree, &[1, 2, 3]),
            (Arity::OneOrThree, &[1, 3]),
            (Arity::ZeroToThree, &[0, 1, 2, 3]),
        ];

        for (arity, accepted) in expected {
            for n in 0..8 {
                let result = arity.check(args(n).len());
                if accepted.contains(&n) {
                    assert_eq!(result, Ok(()), "{:?} should accept {}", arity, n);
                } else {
                    assert_eq!(
                        result,
                        Err(CommandError::Arity(*arity)),
                        "{:?} should reject {}",
                        arity,
                        n
                    );
                }
            }
        }

        assert!(!Arity::OneOrMore.accepts(0));
        assert!((1..50).all(|n| Arity::OneOrMore.accepts(n)));
    }

    #[test]
    fn test_arity_messages_are_distinct() {
        let mut messages: Vec<_> = Arity::ALL.iter().map(|a| a.message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), Arity::ALL.len());
    }

    #[test]
    fn test_altitude() {
        assert_eq!(altitude(&["080"]), Ok(()));
        assert_eq!(altitude(&["080", "x"]), Ok(()));
        assert_eq!(altitude(&["080", "expedite"]), Ok(()));
        assert_eq!(altitude(&["2.5"]), Ok(()));
        assert_eq!(altitude(&["high"]), Err(CommandError::AltitudeNotNumber));
        assert_eq!(altitude(&["080", "now"]), Err(CommandError::InvalidExpedite));
        assert_eq!(
            altitude(&["99999999999999999999"]),
            Err(CommandError::AltitudeOutOfRange)
        );
        assert_eq!(
            altitude::<&str>(&[]),
            Err(CommandError::Arity(Arity::OneOrTwo))
        );
        assert_eq!(
            altitude(&["080", "x", "x"]),
            Err(CommandError::Arity(Arity::OneOrTwo))
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(&["180"]), Ok(()));
        assert_eq!(heading(&["l", "30"]), Ok(()));
        assert_eq!(heading(&["right", "270"]), Ok(()));
        assert_eq!(heading(&["north"]), Err(CommandError::HeadingNotNumber));
        assert_eq!(heading(&["18.5"]), Err(CommandError::HeadingNotNumber));
        assert_eq!(heading(&["up", "30"]), Err(CommandError::InvalidDirection));
        assert_eq!(heading(&["l", "left"]), Err(CommandError::HeadingNotNumber));
        assert_eq!(heading(&["1800"]), Err(CommandError::HeadingTooLong));
        assert_eq!(heading(&["r", "0042"]), Err(CommandError::HeadingTooLong));
        assert_eq!(
            heading(&["l", "30", "now"]),
            Err(CommandError::Arity(Arity::OneOrTwo))
        );
    }

    #[test]
    fn test_hold() {
        assert_eq!(hold::<&str>(&[]), Ok(()));
        assert_eq!(hold(&["dumba", "left", "2min"]), Ok(()));
        assert_eq!(
            hold(&["dumba", "left", "2min", "270"]),
            Err(CommandError::Arity(Arity::ZeroToThree))
        );
        assert_eq!(hold(&["dumba", "270", "l"]), Ok(()));
        assert_eq!(
            hold(&["dumba", "kepec", "left"]),
            Err(CommandError::DuplicateHoldArgument("fix"))
        );
        assert_eq!(hold(&["dumba", "400"]), Err(CommandError::InvalidHoldRadial));
    }

    #[test]
    fn test_squawk() {
        assert_eq!(squawk(&["1200"]), Ok(()));
        assert_eq!(squawk(&["1280"]), Err(CommandError::InvalidSquawk));
        assert_eq!(squawk(&["120"]), Err(CommandError::InvalidSquawk));
        assert_eq!(
            squawk(&["1200", "7700"]),
            Err(CommandError::Arity(Arity::One))
        );
    }

    #[test]
    fn test_fix_and_crossing() {
        assert_eq!(fix(&["dumba", "kepec"]), Ok(()));
        assert_eq!(fix::<&str>(&[]), Err(CommandError::Arity(Arity::OneOrMore)));
        assert_eq!(crossing(&["dumba", "80"]), Ok(()));
        assert_eq!(
            crossing(&["dumba", "high"]),
            Err(CommandError::AltitudeNotNumber)
        );
        assert_eq!(crossing(&["dumba"]), Err(CommandError::Arity(Arity::Two)));
        assert_eq!(
            crossing(&["dumba", "99999999999999999999"]),
            Err(CommandError::AltitudeOutOfRange)
        );
    }

    #[test]
    fn test_speed_and_timewarp() {
        assert_eq!(speed(&["250"]), Ok(()));
        assert_eq!(speed(&["fast"]), Err(CommandError::SpeedNotNumber));
        assert_eq!(timewarp::<&str>(&[]), Ok(()));
        assert_eq!(timewarp(&["50"]), Ok(()));
        assert_eq!(timewarp(&["0.5"]), Ok(()));
        assert_eq!(timewarp(&["50 60"]), Err(CommandError::TimewarpNotNumber));

        let nines = "9".repeat(400);
        assert_eq!(timewarp(&[nines.as_str()]), Err(CommandError::TimewarpNotNumber));
        assert_eq!(speed(&["99999999999999999999"]), Err(CommandError::SpeedNotNumber));
    }
}
