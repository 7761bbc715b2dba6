//! # atc-proto
//!
//! Parser and validator for the terse command language an air-traffic
//! operator types at a simulation console.
//!
//! ## Features
//!
//! - Closed command vocabulary with legacy shortcut aliases
//! - Line classification into system commands and aircraft transmissions
//! - Per-command argument validation with operator-facing messages
//! - Typed argument parsing (altitudes in feet, turn directions, hold patterns)
//! - Optional `serde` support for structured output

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Transmitting to an aircraft
//!
//! ```rust
//! use atc_proto::{CommandKind, CommandParser, ParsedLine};
//!
//! let parser = CommandParser::builtin().expect("builtin registry");
//! let parsed = parser.parse("AAL777 caf cvs to").expect("valid line");
//!
//! if let ParsedLine::Transmit(line) = &parsed {
//!     let kinds: Vec<_> = line.commands.iter().map(|c| c.kind()).collect();
//!     assert_eq!(
//!         kinds,
//!         [CommandKind::ClearedAsFiled, CommandKind::ClimbViaSid, CommandKind::Takeoff]
//!     );
//! }
//! println!("{}", parsed);
//! ```
//!
//! ### Handling rejections
//!
//! ```rust
//! use atc_proto::CommandParser;
//!
//! let parser = CommandParser::builtin().expect("builtin registry");
//! let err = parser.parse("AAL777 to threeve").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid argument length. Expected exactly zero arguments"
//! );
//! ```

pub mod command;
pub mod error;
pub mod line;
pub mod result;
pub mod token;
pub mod transmit;

pub use self::command::{
    Args, Arity, CommandDefinition, CommandInvocation, CommandKind, Registry, TurnDirection,
    Value, BUILTIN_DEFINITIONS,
};
pub use self::error::{CommandError, InvocationError, ParseError, RegistryError};
pub use self::line::{classify, tokenize, Classified};
pub use self::result::{CommandParser, ErrorPolicy, ParsedLine, SystemCommand, TransmitLine};
pub use self::transmit::build_command_list;
