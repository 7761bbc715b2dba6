//! The closed set of root commands.

use std::fmt;

use super::parse;
use super::validate::{self, Arity};
use super::value::Args;
use crate::error::CommandError;

/// A canonical root command.
///
/// Each kind owns its validator and parser; no other command interprets its
/// arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum CommandKind {
    // === System commands ===
    /// `airport <icao>`
    Airport,
    /// `clear`
    Clear,
    /// `pause`
    Pause,
    /// `timewarp [rate]`
    Timewarp,
    /// `tutorial`
    Tutorial,
    /// Reserved token for explicit multi-command transmission.
    Transmit,

    // === Transmit commands ===
    /// `abort`
    Abort,
    /// `altitude <level> [expedite]`
    Altitude,
    /// `caf`
    ClearedAsFiled,
    /// `cvs`
    ClimbViaSid,
    /// `cross <fix> <altitude>`
    Cross,
    /// `delete`
    Delete,
    /// `dvs`
    DescendViaStar,
    /// `direct <fix>`
    Direct,
    /// `fix <fix> [fix ...]`
    Fix,
    /// `fph`
    FlyPresentHeading,
    /// `heading [direction] <heading>`
    Heading,
    /// `hold [fix] [direction] [leg] [radial]`
    Hold,
    /// `land [approach] <runway>`
    Land,
    /// `` ` <position>``
    MoveDataBlock,
    /// `reroute <route>`
    Reroute,
    /// `route <route>`
    Route,
    /// `sa`
    SayAltitude,
    /// `saa`
    SayAssignedAltitude,
    /// `sh`
    SayHeading,
    /// `sah`
    SayAssignedHeading,
    /// `si`
    SayIndicatedAirspeed,
    /// `sas`
    SayAssignedSpeed,
    /// `sr`
    SayRoute,
    /// `sid <procedure>`
    Sid,
    /// `speed <knots>`
    Speed,
    /// `squawk <code>`
    Squawk,
    /// `star <procedure>`
    Star,
    /// `takeoff`
    Takeoff,
    /// `taxi [runway]`
    Taxi,
}

impl CommandKind {
    /// Every root command.
    pub const ALL: &'static [CommandKind] = &[
        CommandKind::Airport,
        CommandKind::Clear,
        CommandKind::Pause,
        CommandKind::Timewarp,
        CommandKind::Tutorial,
        CommandKind::Transmit,
        CommandKind::Abort,
        CommandKind::Altitude,
        CommandKind::ClearedAsFiled,
        CommandKind::ClimbViaSid,
        CommandKind::Cross,
        CommandKind::Delete,
        CommandKind::DescendViaStar,
        CommandKind::Direct,
        CommandKind::Fix,
        CommandKind::FlyPresentHeading,
        CommandKind::Heading,
        CommandKind::Hold,
        CommandKind::Land,
        CommandKind::MoveDataBlock,
        CommandKind::Reroute,
        CommandKind::Route,
        CommandKind::SayAltitude,
        CommandKind::SayAssignedAltitude,
        CommandKind::SayHeading,
        CommandKind::SayAssignedHeading,
        CommandKind::SayIndicatedAirspeed,
        CommandKind::SayAssignedSpeed,
        CommandKind::SayRoute,
        CommandKind::Sid,
        CommandKind::Speed,
        CommandKind::Squawk,
        CommandKind::Star,
        CommandKind::Takeoff,
        CommandKind::Taxi,
    ];

    /// Canonical name, as reported to the executor.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Airport => "airport",
            CommandKind::Clear => "clear",
            CommandKind::Pause => "pause",
            CommandKind::Timewarp => "timewarp",
            CommandKind::Tutorial => "tutorial",
            CommandKind::Transmit => "transmit",
            CommandKind::Abort => "abort",
            CommandKind::Altitude => "altitude",
            CommandKind::ClearedAsFiled => "clearedAsFiled",
            CommandKind::ClimbViaSid => "climbViaSid",
            CommandKind::Cross => "cross",
            CommandKind::Delete => "delete",
            CommandKind::DescendViaStar => "descendViaStar",
            CommandKind::Direct => "direct",
            CommandKind::Fix => "fix",
            CommandKind::FlyPresentHeading => "flyPresentHeading",
            CommandKind::Heading => "heading",
            CommandKind::Hold => "hold",
            CommandKind::Land => "land",
            CommandKind::MoveDataBlock => "moveDataBlock",
            CommandKind::Reroute => "reroute",
            CommandKind::Route => "route",
            CommandKind::SayAltitude => "sayAltitude",
            CommandKind::SayAssignedAltitude => "sayAssignedAltitude",
            CommandKind::SayHeading => "sayHeading",
            CommandKind::SayAssignedHeading => "sayAssignedHeading",
            CommandKind::SayIndicatedAirspeed => "sayIndicatedAirspeed",
            CommandKind::SayAssignedSpeed => "sayAssignedSpeed",
            CommandKind::SayRoute => "sayRoute",
            CommandKind::Sid => "sid",
            CommandKind::Speed => "speed",
            CommandKind::Squawk => "squawk",
            CommandKind::Star => "star",
            CommandKind::Takeoff => "takeoff",
            CommandKind::Taxi => "taxi",
        }
    }

    /// Whether this command addresses the application rather than an aircraft.
    pub fn is_system(self) -> bool {
        matches!(
            self,
            CommandKind::Airport
                | CommandKind::Clear
                | CommandKind::Pause
                | CommandKind::Timewarp
                | CommandKind::Tutorial
                | CommandKind::Transmit
        )
    }

    /// One-line usage pattern.
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Airport => "airport <icao>",
            CommandKind::Clear => "clear",
            CommandKind::Pause => "pause",
            CommandKind::Timewarp => "timewarp [rate]",
            CommandKind::Tutorial => "tutorial",
            CommandKind::Transmit => "transmit <callsign> <command> [args] ...",
            CommandKind::Abort => "<callsign> abort",
            CommandKind::Altitude => "<callsign> altitude <level> [expedite|x]",
            CommandKind::ClearedAsFiled => "<callsign> caf",
            CommandKind::ClimbViaSid => "<callsign> cvs",
            CommandKind::Cross => "<callsign> cross <fix> <altitude>",
            CommandKind::Delete => "<callsign> delete",
            CommandKind::DescendViaStar => "<callsign> dvs",
            CommandKind::Direct => "<callsign> direct <fix>",
            CommandKind::Fix => "<callsign> fix <fix> [fix ...]",
            CommandKind::FlyPresentHeading => "<callsign> fph",
            CommandKind::Heading => "<callsign> heading [left|right] <heading>",
            CommandKind::Hold => "<callsign> hold [fix] [left|right] [leg] [radial]",
            CommandKind::Land => "<callsign> ils [approach] <runway>",
            CommandKind::MoveDataBlock => "<callsign> ` <position>",
            CommandKind::Reroute => "<callsign> reroute <route>",
            CommandKind::Route => "<callsign> route <route>",
            CommandKind::SayAltitude => "<callsign> sa",
            CommandKind::SayAssignedAltitude => "<callsign> saa",
            CommandKind::SayHeading => "<callsign> sh",
            CommandKind::SayAssignedHeading => "<callsign> sah",
            CommandKind::SayIndicatedAirspeed => "<callsign> si",
            CommandKind::SayAssignedSpeed => "<callsign> sas",
            CommandKind::SayRoute => "<callsign> sr",
            CommandKind::Sid => "<callsign> sid <procedure>",
            CommandKind::Speed => "<callsign> speed <knots>",
            CommandKind::Squawk => "<callsign> squawk <code>",
            CommandKind::Star => "<callsign> star <procedure>",
            CommandKind::Takeoff => "<callsign> takeoff",
            CommandKind::Taxi => "<callsign> taxi [runway]",
        }
    }

    /// Check argument count and shape.
    pub fn validate<S: AsRef<str>>(self, args: &[S]) -> Result<(), CommandError> {
        match self {
            CommandKind::Altitude => validate::altitude(args),
            CommandKind::Heading => validate::heading(args),
            CommandKind::Hold => validate::hold(args),
            CommandKind::Squawk => validate::squawk(args),
            CommandKind::Fix => validate::fix(args),
            CommandKind::Cross => validate::crossing(args),
            CommandKind::Speed => validate::speed(args),
            CommandKind::Timewarp => validate::timewarp(args),
            other => other.arity().check(args.len()),
        }
    }

    /// Convert validated arguments into typed values.
    pub fn parse<S: AsRef<str>>(self, args: &[S]) -> Result<Args, CommandError> {
        match self {
            CommandKind::Altitude => parse::altitude(args),
            CommandKind::Heading => parse::heading(args),
            CommandKind::Hold => parse::hold(args),
            CommandKind::Cross => parse::crossing(args),
            CommandKind::Speed => parse::speed(args),
            CommandKind::Timewarp => parse::timewarp(args),
            other if other.arity() == Arity::Zero => Ok(parse::none(args)),
            _ => Ok(parse::passthrough(args)),
        }
    }

    /// Accepted argument counts.
    pub fn arity(self) -> Arity {
        match self {
            CommandKind::Airport
            | CommandKind::Direct
            | CommandKind::MoveDataBlock
            | CommandKind::Reroute
            | CommandKind::Route
            | CommandKind::Sid
            | CommandKind::Speed
            | CommandKind::Squawk
            | CommandKind::Star => Arity::One,

            CommandKind::Cross => Arity::Two,

            CommandKind::Timewarp | CommandKind::Taxi => Arity::ZeroOrOne,

            CommandKind::Altitude | CommandKind::Heading | CommandKind::Land => Arity::OneOrTwo,

            CommandKind::Fix | CommandKind::Transmit => Arity::OneOrMore,

            CommandKind::Hold => Arity::ZeroToThree,

            CommandKind::Clear
            | CommandKind::Pause
            | CommandKind::Tutorial
            | CommandKind::Abort
            | CommandKind::ClearedAsFiled
            | CommandKind::ClimbViaSid
            | CommandKind::Delete
            | CommandKind::DescendViaStar
            | CommandKind::FlyPresentHeading
            | CommandKind::SayAltitude
            | CommandKind::SayAssignedAltitude
            | CommandKind::SayHeading
            | CommandKind::SayAssignedHeading
            | CommandKind::SayIndicatedAirspeed
            | CommandKind::SayAssignedSpeed
            | CommandKind::SayRoute
            | CommandKind::Takeoff => Arity::Zero,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CommandKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
