//! iCalendar content-line generation (RFC 5545).
//!
//! A write-only text-generation library: a builder accumulates content
//! lines (`NAME[;PARAMS]:VALUE`), including BEGIN/END component nesting,
//! and renders the document folded at 75 octets with CRLF terminators.
//!
//! - `core`: value and parameter models
//! - `build`: formatting, emission, and folding
//!
//! ## Example
//!
//! ```rust
//! use icalgen::{IcalBuilder, ParamMap};
//!
//! let mut cal = IcalBuilder::new();
//! cal.component("vcalendar", |cal| {
//!     cal.emit("version", "2.0")?;
//!     cal.component("vevent", |cal| {
//!         cal.emit("summary", "Team meeting")?;
//!         cal.emit_with(
//!             "organizer",
//!             "MAILTO:jsmith@host.com",
//!             [ParamMap::new().with("cn", "\"John Smith\"").into()],
//!         )
//!     })
//! })?;
//!
//! let text = cal.render();
//! assert!(text.contains("ORGANIZER;CN=\"John Smith\":MAILTO:jsmith@host.com\r\n"));
//! # Ok::<(), icalgen::EmitError>(())
//! ```
//!
//! The library does not parse or validate iCalendar input, and it does
//! not escape value text beyond the documented line-break handling.

pub mod build;
pub mod core;
mod error;

pub use crate::build::{IcalBuilder, Sink, fold, fold_line};
pub use crate::core::{Date, DateTime, ParamArg, ParamMap, Value};
pub use crate::error::{EmitError, EmitResult};
