use super::feet;
use crate::command::{Args, Arity, Value};
use crate::error::CommandError;
use crate::token;

/// `["080"]` → `[8000, false]`, `["080", "x"]` → `[8000, true]`.
///
/// The expedite flag only records that a second argument was given; its
/// spelling was checked by the validator.
pub fn altitude<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    let level = args.first().ok_or(CommandError::AltitudeNotNumber)?;
    let altitude = feet(level.as_ref())?;
    let expedite = args.len() == 2;

    Ok(Args::from_iter([Value::Int(altitude), Value::Bool(expedite)]))
}

/// `[direction?, heading, incremental]`
///
/// With a direction, a one- or two-digit token means "turn by N degrees"
/// and a three-digit token means "turn to heading N".
pub fn heading<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    let (direction, degrees) = match args {
        [degrees] => (None, degrees.as_ref()),
        [direction, degrees] => {
            let direction =
                token::turn_direction(direction.as_ref()).ok_or(CommandError::InvalidDirection)?;
            (Some(direction), degrees.as_ref())
        }
        _ => return Err(CommandError::Arity(Arity::OneOrTwo)),
    };

    if degrees.len() > 3 {
        return Err(CommandError::HeadingTooLong);
    }
    let heading = token::integer(degrees).ok_or(CommandError::HeadingNotNumber)?;
    let incremental = direction.is_some() && degrees.len() <= 2;

    Ok(Args::from_iter([
        Value::from(direction),
        Value::Int(heading),
        Value::Bool(incremental),
    ]))
}

/// `["dumba", "80"]` → `["dumba", 8000]`
pub fn crossing<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    let [fix, altitude] = args else {
        return Err(CommandError::Arity(Arity::Two));
    };
    let altitude = feet(altitude.as_ref())?;

    Ok(Args::from_iter([
        Value::from(fix.as_ref()),
        Value::Int(altitude),
    ]))
}

/// `["250"]` → `[250]`
pub fn speed<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    args.first()
        .and_then(|s| token::numeric_value(s.as_ref()))
        .map(|v| Args::from_iter([v]))
        .ok_or(CommandError::SpeedNotNumber)
}
