//! Content-line serialization: value and parameter formatting, emission,
//! and folding (RFC 5545 §3.1).

mod builder;
mod fold;
mod params;
mod value;

pub use builder::{IcalBuilder, Sink};
pub use fold::{fold, fold_line};
pub use params::format_params;
pub use value::format_value;
