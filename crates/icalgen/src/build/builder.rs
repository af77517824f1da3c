//! Content-line accumulation and document rendering.

use std::fmt;

use crate::core::{ParamArg, Value, canonical_name};
use crate::error::EmitResult;

use super::fold::{CRLF, fold};
use super::params::format_params;
use super::value::format_value;

/// Append-only accumulator for raw (unfolded) content lines.
///
/// `String` is the default sink. Implementing the trait for another type
/// lets a builder target streaming output without changing the emitter.
pub trait Sink {
    /// Appends raw text.
    fn append(&mut self, text: &str);

    /// Returns the text accumulated so far.
    fn as_text(&self) -> &str;
}

impl Sink for String {
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }

    fn as_text(&self) -> &str {
        self
    }
}

/// Accumulates content lines and renders the folded document.
///
/// Property names are free-form: any identifier is valid, and the same
/// name may be emitted any number of times. Lines are buffered unfolded;
/// folding happens on [`render`](Self::render), which never mutates the
/// buffer. There is no finalize state; a builder can be rendered and
/// then appended to again.
///
/// ```rust
/// use icalgen::IcalBuilder;
///
/// let mut cal = IcalBuilder::new();
/// cal.component("vcalendar", |cal| {
///     cal.emit("version", "2.0")?;
///     cal.component("vevent", |cal| cal.emit("summary", "Team meeting"))
/// })?;
/// assert!(cal.render().starts_with("BEGIN:VCALENDAR\r\n"));
/// # Ok::<(), icalgen::EmitError>(())
/// ```
#[derive(Debug, Default)]
pub struct IcalBuilder<S: Sink = String> {
    target: S,
}

impl IcalBuilder {
    /// Creates a builder over an in-memory string buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: String::new(),
        }
    }
}

impl<S: Sink> IcalBuilder<S> {
    /// Creates a builder over a caller-supplied sink.
    #[must_use]
    pub fn with_sink(target: S) -> Self {
        Self { target }
    }

    /// Emits one content line with no parameters.
    ///
    /// ## Errors
    ///
    /// Propagates value formatting errors; nothing is appended on failure.
    pub fn emit(&mut self, name: &str, value: impl Into<Value>) -> EmitResult<()> {
        self.emit_with(name, value, std::iter::empty())
    }

    /// Emits one content line of the shape `NAME[;PARAMS]:VALUE`.
    ///
    /// The property name is canonicalized (uppercase, underscores to
    /// hyphens). No length checking happens here; folding is deferred to
    /// [`render`](Self::render).
    ///
    /// ## Errors
    ///
    /// Propagates value and parameter formatting errors; a failed emit
    /// appends nothing.
    #[tracing::instrument(skip(self, value, params))]
    pub fn emit_with(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        params: impl IntoIterator<Item = ParamArg>,
    ) -> EmitResult<()> {
        let args: Vec<ParamArg> = params.into_iter().collect();
        let suffix = format_params(&args)?;
        let payload = format_value(&value.into())?;
        let name = canonical_name(name);
        tracing::trace!(%name, "emit content line");
        self.target
            .append(&format!("{name}{suffix}:{payload}{CRLF}"));
        Ok(())
    }

    /// Emits a component block: `BEGIN:NAME`, the closure's emissions,
    /// `END:NAME`.
    ///
    /// The closure runs against the same builder, so nested blocks
    /// interleave into one flat line sequence in document order. Blocks
    /// nest without depth limit.
    ///
    /// ## Errors
    ///
    /// Propagates the closure's error; lines it emitted before failing
    /// remain in the buffer.
    #[tracing::instrument(skip(self, build))]
    pub fn component<F>(&mut self, name: &str, build: F) -> EmitResult<()>
    where
        F: FnOnce(&mut Self) -> EmitResult<()>,
    {
        let name = canonical_name(name);
        tracing::debug!(%name, "emit component block");
        self.target.append(&format!("BEGIN:{name}{CRLF}"));
        build(self)?;
        self.target.append(&format!("END:{name}{CRLF}"));
        Ok(())
    }

    /// Appends pre-formed raw text verbatim, terminators included,
    /// bypassing name canonicalization and value formatting. The escape
    /// hatch for content the typed operations cannot express; the text
    /// still participates in folding at render time.
    pub fn append_raw(&mut self, text: &str) {
        self.target.append(text);
    }

    /// Renders the folded document from the current buffer contents.
    ///
    /// Folding never mutates the buffer, so repeated calls return the
    /// same text until the next append.
    #[must_use]
    pub fn render(&self) -> String {
        fold(self.target.as_text())
    }

    /// Consumes the builder and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.target
    }
}

impl<S: Sink> fmt::Display for IcalBuilder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmitError;

    #[test]
    fn emit_canonicalizes_names() {
        let mut builder = IcalBuilder::new();
        builder.emit("last_modified", "x").expect("emits");
        assert_eq!(builder.render(), "LAST-MODIFIED:x\r\n");
    }

    #[test]
    fn failed_emit_appends_nothing() {
        let mut builder = IcalBuilder::new();
        builder.emit("ok", "fine").expect("emits");
        let err = builder
            .emit("bad", Value::Unknown("???".to_string()))
            .expect_err("rejects");
        assert!(matches!(err, EmitError::UnsupportedValueType(_)));
        assert_eq!(builder.render(), "OK:fine\r\n");
    }

    #[test]
    fn render_is_stable_between_appends() {
        let mut builder = IcalBuilder::new();
        builder.emit("foo", "bar").expect("emits");
        let first = builder.render();
        assert_eq!(builder.render(), first);

        builder.emit("baz", "qux").expect("emits");
        assert_eq!(builder.render(), format!("{first}BAZ:qux\r\n"));
    }

    #[test]
    fn custom_sink_receives_raw_lines() {
        #[derive(Default)]
        struct Recorder {
            buffer: String,
            appends: usize,
        }

        impl Sink for Recorder {
            fn append(&mut self, text: &str) {
                self.buffer.push_str(text);
                self.appends += 1;
            }

            fn as_text(&self) -> &str {
                &self.buffer
            }
        }

        let mut builder = IcalBuilder::with_sink(Recorder::default());
        builder
            .component("vcalendar", |cal| cal.emit("version", "2.0"))
            .expect("emits");
        assert_eq!(builder.render(), "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n");

        let recorder = builder.into_sink();
        assert_eq!(recorder.appends, 3);
    }

    #[test]
    fn display_matches_render() {
        let mut builder = IcalBuilder::new();
        builder.emit("gibberish", true).expect("emits");
        assert_eq!(builder.to_string(), builder.render());
    }
}
