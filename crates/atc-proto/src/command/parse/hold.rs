use crate::command::{Args, TurnDirection, Value};
use crate::error::CommandError;
use crate::token;

/// Turn direction used when the operator does not give one.
pub const DEFAULT_HOLD_DIRECTION: TurnDirection = TurnDirection::Right;

/// Leg length used when the operator does not give one.
pub const DEFAULT_LEG_LENGTH: &str = "1min";

/// The slot a single hold argument fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HoldPart<'a> {
    Direction(TurnDirection),
    Leg(&'a str),
    Radial(i64),
    Fix(&'a str),
}

impl<'a> HoldPart<'a> {
    /// Classify one argument by shape. A `[r]ddd` token outside 000-360 is
    /// rejected instead of being taken for a fix name.
    pub(crate) fn classify(arg: &'a str) -> Result<Self, CommandError> {
        if let Some(direction) = token::turn_direction(arg) {
            return Ok(HoldPart::Direction(direction));
        }
        if token::leg(arg).is_some() {
            return Ok(HoldPart::Leg(arg));
        }
        if token::is_radial_shaped(arg) {
            return token::hold_radial(arg)
                .map(HoldPart::Radial)
                .ok_or(CommandError::InvalidHoldRadial);
        }
        Ok(HoldPart::Fix(arg))
    }

    /// Operator-facing name of the slot.
    pub(crate) fn slot(self) -> &'static str {
        match self {
            HoldPart::Direction(_) => "turn direction",
            HoldPart::Leg(_) => "leg length",
            HoldPart::Radial(_) => "radial",
            HoldPart::Fix(_) => "fix",
        }
    }
}

/// `[turnDirection, legLength, fixName, radial]`
///
/// Arguments may come in any order and each fills the slot its shape
/// matches. A missing fix is left as null for the executor to report.
pub fn hold<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    let mut direction = None;
    let mut leg = None;
    let mut radial = None;
    let mut fix = None;

    for arg in args {
        let part = HoldPart::classify(arg.as_ref())?;
        let filled = match part {
            HoldPart::Direction(d) => direction.replace(d).is_some(),
            HoldPart::Leg(l) => leg.replace(l).is_some(),
            HoldPart::Radial(r) => radial.replace(r).is_some(),
            HoldPart::Fix(f) => fix.replace(f).is_some(),
        };
        if filled {
            return Err(CommandError::DuplicateHoldArgument(part.slot()));
        }
    }

    Ok(Args::from_iter([
        Value::Direction(direction.unwrap_or(DEFAULT_HOLD_DIRECTION)),
        Value::from(leg.unwrap_or(DEFAULT_LEG_LENGTH)),
        Value::from(fix),
        Value::from(radial),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(direction: TurnDirection, leg: &str, fix: &str) -> Vec<Value> {
        vec![
            Value::Direction(direction),
            Value::from(leg),
            Value::from(fix),
            Value::Null,
        ]
    }

    #[test]
    fn test_argument_order_independence() {
        let want = expected(TurnDirection::Left, "1min", "dumba");
        for args in [
            ["dumba", "left", "1min"],
            ["left", "1min", "dumba"],
            ["1min", "left", "dumba"],
        ] {
            assert_eq!(hold(&args).unwrap().to_vec(), want, "{:?}", args);
        }
    }

    #[test]
    fn test_defaults() {
        let args = hold(&["dumba"]).unwrap();
        assert_eq!(
            args.to_vec(),
            expected(TurnDirection::Right, "1min", "dumba")
        );
    }

    #[test]
    fn test_short_direction_and_distance_leg() {
        let args = hold(&["l", "dumba", "4nm"]).unwrap();
        assert_eq!(args.to_vec(), expected(TurnDirection::Left, "4nm", "dumba"));
    }

    #[test]
    fn test_radial() {
        let args = hold(&["dumba", "270", "2min"]).unwrap();
        assert_eq!(
            args.as_slice(),
            &[
                Value::Direction(TurnDirection::Right),
                Value::from("2min"),
                Value::from("dumba"),
                Value::Int(270),
            ]
        );

        let args = hold(&["r090", "dumba"]).unwrap();
        assert_eq!(args[3], Value::Int(90));
        assert_eq!(args[0], Value::Direction(TurnDirection::Right));
    }

    #[test]
    fn test_rejects_repeated_slot() {
        assert_eq!(
            hold(&["dumba", "kepec", "left"]),
            Err(CommandError::DuplicateHoldArgument("fix"))
        );
        assert_eq!(
            hold(&["left", "r", "dumba"]),
            Err(CommandError::DuplicateHoldArgument("turn direction"))
        );
        assert_eq!(
            hold(&["1min", "dumba", "2min"]),
            Err(CommandError::DuplicateHoldArgument("leg length"))
        );
    }

    #[test]
    fn test_rejects_out_of_range_radial() {
        assert_eq!(hold(&["dumba", "400"]), Err(CommandError::InvalidHoldRadial));
        assert_eq!(hold(&["r361", "dumba"]), Err(CommandError::InvalidHoldRadial));
    }

    #[test]
    fn test_missing_fix_is_null() {
        let args = hold(&["left", "2min"]).unwrap();
        assert!(args[2].is_null());

        let args = hold::<&str>(&[]).unwrap();
        assert_eq!(
            args.as_slice(),
            &[
                Value::Direction(TurnDirection::Right),
                Value::from("1min"),
                Value::Null,
                Value::Null,
            ]
        );
    }
}
