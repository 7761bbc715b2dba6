//! Argument parsers.
//!
//! Parsers turn validated string arguments into typed [`Value`]s. They are
//! only called after the matching validator accepted the arguments, but
//! still return an error instead of panicking when handed something else.

mod hold;
mod navigation;
mod system;

pub use hold::{hold, DEFAULT_HOLD_DIRECTION, DEFAULT_LEG_LENGTH};
pub(crate) use hold::HoldPart;
pub use navigation::{altitude, crossing, heading, speed};
pub use system::{timewarp, DEFAULT_TIMEWARP};

use crate::command::{Args, Value};
use crate::error::CommandError;
use crate::token;

/// Typed altitudes are flight levels in hundreds of feet: `080` means 8,000 ft.
pub(crate) const FEET_PER_UNIT: f64 = 100.0;

/// Convert a flight-level token to whole feet.
pub(crate) fn feet(token: &str) -> Result<i64, CommandError> {
    let level = token::number(token).ok_or(CommandError::AltitudeNotNumber)?;
    let feet = (level * FEET_PER_UNIT).round();
    // `i64::MAX as f64` rounds up to 2^63, which no longer fits.
    if feet < i64::MAX as f64 {
        Ok(feet as i64)
    } else {
        Err(CommandError::AltitudeOutOfRange)
    }
}

/// Arguments kept as text, unchanged.
pub fn passthrough<S: AsRef<str>>(args: &[S]) -> Args {
    args.iter().map(|s| Value::from(s.as_ref())).collect()
}

/// Commands without arguments parse to nothing.
pub fn none<S: AsRef<str>>(_args: &[S]) -> Args {
    Args::new()
}
