use crate::command::{Args, Value};
use crate::error::CommandError;
use crate::token;

/// Simulation rate used when `timewarp` is given without a rate.
pub const DEFAULT_TIMEWARP: i64 = 1;

/// `[]` → `[1]`, `["50"]` → `[50]`
pub fn timewarp<S: AsRef<str>>(args: &[S]) -> Result<Args, CommandError> {
    let rate = match args.first() {
        None => Value::Int(DEFAULT_TIMEWARP),
        Some(rate) => token::numeric_value(rate.as_ref()).ok_or(CommandError::TimewarpNotNumber)?,
    };
    Ok(Args::from_iter([rate]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timewarp() {
        assert_eq!(timewarp::<&str>(&[]).unwrap().as_slice(), &[Value::Int(1)]);
        assert_eq!(timewarp(&["50"]).unwrap().as_slice(), &[Value::Int(50)]);
        assert_eq!(timewarp(&["0.5"]).unwrap().as_slice(), &[Value::Float(0.5)]);
        assert_eq!(timewarp(&["fast"]), Err(CommandError::TimewarpNotNumber));
    }
}
