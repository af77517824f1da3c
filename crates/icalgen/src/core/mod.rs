//! Core models for content-line emission.
//!
//! These types carry what the builder needs to render a line: a typed
//! property value, and the parameter arguments attached to it. They hold
//! no wire text themselves; formatting lives in [`crate::build`].

mod datetime;
mod parameter;
mod value;

pub use datetime::{Date, DateTime};
pub use parameter::{ParamArg, ParamMap};
pub(crate) use parameter::canonical_name;
pub use value::Value;
